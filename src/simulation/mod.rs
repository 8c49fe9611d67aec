pub mod states;
pub mod params;
pub mod engine;
pub mod integrator;
pub mod collision;
pub mod placement;
pub mod loader;
pub mod scenario;
