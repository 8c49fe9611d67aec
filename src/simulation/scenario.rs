//! Build fully-initialized simulation scenarios
//!
//! A `Scenario` bundles the arena parameters with the particle store.
//! It is built either by random placement or from a loaded atom list, and
//! is inserted into bevy as a `Resource` for the viewer's systems.

use bevy::prelude::Resource;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::simulation::collision::resolve_collisions;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::placement::random_atoms;
use crate::simulation::states::{Atom, System};
use crate::visualization::canvas::Canvas;

/// Runtime bundle: arena parameters and the current system state.
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    /// Random mode: `parameters.count` atoms by rejection sampling.
    /// A fixed `parameters.seed` makes the layout reproducible.
    pub fn build_random(parameters: Parameters) -> Result<Self> {
        let mut rng = match parameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let atoms = random_atoms(&parameters, &mut rng)?;
        info!("generated {} random atoms", atoms.len());

        Ok(Self::build_loaded(parameters, atoms))
    }

    /// Loaded mode: take the atoms as given.
    pub fn build_loaded(parameters: Parameters, atoms: Vec<Atom>) -> Self {
        Self {
            parameters,
            system: System::new(atoms),
        }
    }

    /// One tick: integrate, then resolve collisions.
    pub fn step(&mut self) {
        euler_integrator(&mut self.system, &self.parameters);
        resolve_collisions(&mut self.system);
        self.system.tick += 1;
    }

    /// Redraw the whole frame: clear, one filled disc per atom, flush.
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        canvas.clear();
        for a in &self.system.atoms {
            let d = (2.0 * a.radius) as i32;
            canvas.fill_ellipse(
                (a.x.x - a.radius) as i32,
                (a.x.y - a.radius) as i32,
                d,
                d,
                a.color,
                None,
            );
        }
        canvas.flush();
    }
}
