//! Random initial placement by rejection sampling
//!
//! Each atom draws a radius, then up to `attempts` candidate centres from
//! the sub-rectangle that keeps the whole disc inside the arena. A candidate
//! that overlaps an already placed atom is thrown away. Running out of
//! attempts is fatal: there is no fallback packing.

use std::f64::consts::TAU;

use log::debug;
use rand::Rng;

use crate::error::{Error, Result};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Atom, NVec2, Rgb};

/// Place `params.count` non-overlapping atoms using `rng`.
/// Ranges that cannot be sampled are rejected with `Error::InvalidParam`.
pub fn random_atoms<R: Rng>(params: &Parameters, rng: &mut R) -> Result<Vec<Atom>> {
    params.validate()?;

    let mut atoms: Vec<Atom> = Vec::with_capacity(params.count);

    for index in 0..params.count {
        let radius = rng.random_range(params.radius_min..=params.radius_max);
        let x = place_centre(index, radius, &atoms, params, rng)?;

        let speed = rng.random_range(params.speed_min..=params.speed_max);
        let heading = rng.random_range(0.0..TAU);
        let v = NVec2::new(speed * heading.cos(), speed * heading.sin());

        let color = Rgb(rng.random_range(0..=0xFF_FF_FF));

        atoms.push(Atom::new(color, radius, x, v));
    }

    debug!("placed {} atoms", atoms.len());
    Ok(atoms)
}

/// Draw centres for a disc of `radius` until one clears every placed atom.
fn place_centre<R: Rng>(
    index: usize,
    radius: f64,
    placed: &[Atom],
    params: &Parameters,
    rng: &mut R,
) -> Result<NVec2> {
    for attempt in 1..=params.attempts {
        let x = NVec2::new(
            rng.random_range(radius..=params.width - radius),
            rng.random_range(radius..=params.height - radius),
        );

        let candidate = Atom::new(Rgb::BLACK, radius, x, NVec2::zeros());
        if !placed.iter().any(|p| p.overlaps(&candidate)) {
            return Ok(x);
        }

        debug!("atom {index}: candidate {attempt}/{} overlaps, redrawing", params.attempts);
    }

    Err(Error::PlacementExhausted {
        index,
        attempts: params.attempts,
    })
}
