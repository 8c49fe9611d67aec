use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Atom, NVec2, Rgb};
use crate::simulation::collision::resolve_collisions;

/// Helper to build a square lattice of `n` touching-distance atoms with a matching arena
fn make_lattice(n: usize) -> Scenario {
    let radius = 5.0;
    let spacing = 2.0 * radius + 2.0;
    let side = (n as f64).sqrt().ceil() as usize;

    let mut atoms = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions and velocities, no rand needed
        let x = NVec2::new(
            radius + 1.0 + (i % side) as f64 * spacing,
            radius + 1.0 + (i / side) as f64 * spacing,
        );
        let v = NVec2::new((i_f * 0.37).sin() * 3.0, (i_f * 0.13).cos() * 3.0);

        atoms.push(Atom::new(Rgb(i as u32 & 0xFF_FF_FF), radius, x, v));
    }

    let extent = side as f64 * spacing + 2.0;
    let parameters = Parameters {
        width: extent,
        height: extent,
        count: n,
        ..Parameters::default()
    };

    Scenario::build_loaded(parameters, atoms)
}

/// Mean cost of a full tick and of the collision sweep alone for a range of n
/// Paste output directly into excel to graph
pub fn bench_ticks() {
    println!("N,tick_ms,sweep_ms");

    for n in [10, 50, 100, 200, 400, 800, 1600, 3200] {
        // Small n: average over many ticks to smooth noise
        let ticks = if n <= 400 { 200 } else { 20 };

        let mut scenario = make_lattice(n);

        // Warm-up
        scenario.step();

        let t0 = Instant::now();
        for _ in 0..ticks {
            scenario.step();
        }
        let tick_ms = t0.elapsed().as_secs_f64() * 1000.0 / ticks as f64;

        let mut sys = scenario.system.clone();
        let t1 = Instant::now();
        for _ in 0..ticks {
            resolve_collisions(&mut sys);
        }
        let sweep_ms = t1.elapsed().as_secs_f64() * 1000.0 / ticks as f64;

        println!("{},{:.6},{:.6}", n, tick_ms, sweep_ms);
    }
}
