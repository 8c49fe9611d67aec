//! Arena and placement parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - arena size, window title and background colour,
//! - atom count for random placement,
//! - radius and speed ranges, the retry budget and an optional seed
//!
//! The defaults are the compiled-in constants of the classic demo.

use crate::error::{Error, Result};
use crate::simulation::states::Rgb;

pub const DEFAULT_WIDTH: f64 = 640.0;
pub const DEFAULT_HEIGHT: f64 = 480.0;
pub const DEFAULT_TICKS: u64 = 200;
pub const DEFAULT_DELAY_MS: u64 = 40;
pub const DEFAULT_COUNT: usize = 10;
pub const DEFAULT_RADIUS: (f64, f64) = (10.0, 30.0);
pub const DEFAULT_SPEED: (f64, f64) = (1.0, 5.0);
pub const DEFAULT_ATTEMPTS: u32 = 3;
pub const DEFAULT_TITLE: &str = "Atoms";

#[derive(Debug, Clone)]
pub struct Parameters {
    pub width: f64,         // arena width
    pub height: f64,        // arena height
    pub title: String,      // window title
    pub background: Rgb,    // canvas fill colour
    pub count: usize,       // atoms to generate in random mode
    pub radius_min: f64,    // smallest random radius
    pub radius_max: f64,    // largest random radius
    pub speed_min: f64,     // slowest random speed
    pub speed_max: f64,     // fastest random speed
    pub attempts: u32,      // placement draws per atom before giving up
    pub seed: Option<u64>,  // None -> seeded from the OS
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            background: Rgb::WHITE,
            count: DEFAULT_COUNT,
            radius_min: DEFAULT_RADIUS.0,
            radius_max: DEFAULT_RADIUS.1,
            speed_min: DEFAULT_SPEED.0,
            speed_max: DEFAULT_SPEED.1,
            attempts: DEFAULT_ATTEMPTS,
            seed: None,
        }
    }
}

impl Parameters {
    /// Reject settings that random placement cannot draw from.
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(Error::InvalidParam(format!(
                "arena must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        if self.count == 0 {
            return Err(Error::InvalidParam("atom count must be > 0".into()));
        }
        if !(self.radius_min > 0.0 && self.radius_min <= self.radius_max) {
            return Err(Error::InvalidParam(format!(
                "radius range [{}, {}] must be positive and ordered",
                self.radius_min, self.radius_max
            )));
        }
        if 2.0 * self.radius_max > self.width.min(self.height) {
            return Err(Error::InvalidParam(format!(
                "radius {} does not fit in a {} x {} arena",
                self.radius_max, self.width, self.height
            )));
        }
        if !(self.speed_min >= 0.0 && self.speed_min <= self.speed_max) {
            return Err(Error::InvalidParam(format!(
                "speed range [{}, {}] must be non-negative and ordered",
                self.speed_min, self.speed_max
            )));
        }
        if self.attempts == 0 {
            return Err(Error::InvalidParam("placement attempts must be >= 1".into()));
        }
        Ok(())
    }
}
