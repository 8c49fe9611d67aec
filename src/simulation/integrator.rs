//! Fixed-step integrator with elastic wall reflection
//!
//! Explicit Euler with an implicit step of one tick: `x += v`.
//! Each axis is then checked against its two walls independently,
//! so a disc driven into a corner flips both velocity components.

use super::states::{Atom, System};
use super::params::Parameters;

/// Advance every atom by one tick and reflect it off the arena walls.
pub fn euler_integrator(sys: &mut System, params: &Parameters) {
    for a in sys.atoms.iter_mut() {
        // Drift: x_n+1 = x_n + v_n
        a.x += a.v;

        reflect_walls(a, params.width, params.height);
    }
}

/// Clamp an atom tangent to any wall it has reached and negate that velocity component.
/// No energy is lost at the wall.
pub fn reflect_walls(a: &mut Atom, width: f64, height: f64) {
    let r = a.radius;

    // x axis: left wall at 0, right wall at width
    if a.x.x - r <= 0.0 {
        a.x.x = r;
        a.v.x = -a.v.x;
    } else if a.x.x + r >= width {
        a.x.x = width - r;
        a.v.x = -a.v.x;
    }

    // y axis: top wall at 0, bottom wall at height (Y grows downward)
    if a.x.y - r <= 0.0 {
        a.x.y = r;
        a.v.y = -a.v.y;
    } else if a.x.y + r >= height {
        a.x.y = height - r;
        a.v.y = -a.v.y;
    }
}
