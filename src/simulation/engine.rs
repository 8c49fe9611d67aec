//! Fixed-step driver
//!
//! `Engine` sequences ticks for a headless run: step the scenario,
//! render it onto a canvas, then block for the inter-tick delay.
//! The bevy viewer uses the same `ticks`/`delay` pair on its fixed timestep.

use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::simulation::params::{DEFAULT_DELAY_MS, DEFAULT_TICKS};
use crate::simulation::scenario::Scenario;
use crate::visualization::canvas::Canvas;

#[derive(Debug, Clone)]
pub struct Engine {
    pub ticks: u64,      // number of ticks to run
    pub delay: Duration, // real-time pause after each rendered tick
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

impl Engine {
    /// Run `ticks` ticks against `canvas`. Opening and closing the canvas is left to the caller.
    pub fn run<C: Canvas>(&self, scenario: &mut Scenario, canvas: &mut C) {
        info!(
            "running {} ticks of {} atoms, {:?} per tick, kinetic energy {:.6}",
            self.ticks,
            scenario.system.len(),
            self.delay,
            scenario.system.kinetic_energy()
        );

        for _ in 0..self.ticks {
            scenario.step();
            scenario.render(canvas);

            debug!(
                "tick {}: energy = {:.6}, momentum = ({:.6}, {:.6})",
                scenario.system.tick,
                scenario.system.kinetic_energy(),
                scenario.system.momentum().x,
                scenario.system.momentum().y
            );

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        info!(
            "finished after {} ticks, kinetic energy {:.6}",
            scenario.system.tick,
            scenario.system.kinetic_energy()
        );
    }
}
