pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Error, Result};

pub use simulation::states::{Atom, System, Rgb, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::integrator::{euler_integrator, reflect_walls};
pub use simulation::collision::{resolve_collisions, resolve_pair};
pub use simulation::placement::random_atoms;
pub use simulation::loader::{parse_atoms, read_atoms, write_atoms};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ArenaConfig, EngineConfig, PlacementConfig, ScenarioConfig};

pub use visualization::canvas::{Canvas, Ellipse, FrameLog};
pub use visualization::atoms_vis2d::run_2d;

pub use benchmark::benchmark::bench_ticks;
