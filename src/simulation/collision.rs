//! Pairwise collision detection and elastic response
//!
//! Every unordered pair (i, j), i < j, is visited once per tick in
//! ascending order, always against the pair's current state. Resolving
//! one pair can therefore move an atom into or out of a later pair; 3+
//! body contacts are handled one pair at a time.
//!
//! For an overlapping pair:
//! 1. the second atom is pushed out along the centre line by the full
//!    overlap depth, the first atom stays put;
//! 2. both velocities are rotated into a frame aligned with the contact
//!    normal, the normal components are exchanged about the centre-of-mass
//!    velocity (masses r^2), and the result is rotated back.

use nalgebra::Rotation2;

use super::states::{Atom, NVec2, System};

/// Resolve all overlapping pairs in `sys` once.
/// Returns the number of pairs that were in contact.
pub fn resolve_collisions(sys: &mut System) -> usize {
    let n = sys.atoms.len();
    let mut contacts = 0;

    for i in 0..n {
        // split so that atoms[i] and atoms[j] can be borrowed mutably together
        let (head, tail) = sys.atoms.split_at_mut(i + 1);
        let a = &mut head[i];

        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                contacts += 1;
            }
        }
    }

    contacts
}

/// Resolve a single pair. Returns `false` (and touches nothing) when they do not overlap.
pub fn resolve_pair(a: &mut Atom, b: &mut Atom) -> bool {
    if !a.overlaps(b) {
        return false;
    }

    let d = b.x - a.x;
    let dist = d.norm();
    let sum_r = a.radius + b.radius;

    let normal = contact_normal(d, dist);

    depenetrate(b, normal, sum_r - dist);
    exchange_normal_velocities(a, b, normal);

    true
}

/// Unit vector from the first centre to the second.
/// Coincident centres have no direction; fall back to +x.
pub fn contact_normal(d: NVec2, dist: f64) -> NVec2 {
    if dist > 0.0 {
        d / dist
    } else {
        NVec2::new(1.0, 0.0)
    }
}

/// Move `b` along `normal` by `depth`, leaving the pair exactly touching.
pub fn depenetrate(b: &mut Atom, normal: NVec2, depth: f64) {
    b.x += depth * normal;
}

/// 1-D elastic exchange along the contact normal; tangential components are untouched.
pub fn exchange_normal_velocities(a: &mut Atom, b: &mut Atom, normal: NVec2) {
    // Frame whose local x axis is the contact normal and local y axis the tangent
    let frame = Rotation2::new(normal.y.atan2(normal.x));

    let va = frame.inverse_transform_vector(&a.v);
    let vb = frame.inverse_transform_vector(&b.v);

    let (ma, mb) = (a.mass(), b.mass());

    // Centre-of-mass velocity along the normal
    let v_cm = (ma * va.x + mb * vb.x) / (ma + mb);

    // v' = 2 v_cm - v conserves normal momentum and kinetic energy
    let va_new = NVec2::new(2.0 * v_cm - va.x, va.y);
    let vb_new = NVec2::new(2.0 * v_cm - vb.x, vb.y);

    a.v = frame.transform_vector(&va_new);
    b.v = frame.transform_vector(&vb_new);
}
