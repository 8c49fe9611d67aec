//! Configuration types for loading run settings from YAML.
//!
//! Every field is optional; anything left out keeps the classic demo's
//! compiled-in value. A scenario file consists of:
//!
//! - [`ArenaConfig`]     – canvas size, title and background
//! - [`EngineConfig`]    – tick count and inter-tick delay
//! - [`PlacementConfig`] – random placement ranges, retry budget and seed
//! - [`ScenarioConfig`]  – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! arena:
//!   width: 640
//!   height: 480
//!   title: "Atoms"
//!   background: 16777215   # 0xFFFFFF
//!
//! engine:
//!   ticks: 200
//!   delay_ms: 40
//!
//! placement:
//!   count: 10
//!   radius_min: 10.0
//!   radius_max: 30.0
//!   speed_min: 1.0
//!   speed_max: 5.0
//!   attempts: 3
//!   seed: 42              # omit for a fresh layout every run
//! ```
//!
//! [`ScenarioConfig::to_runtime`] validates the values and maps them onto
//! the runtime [`Parameters`] and [`Engine`].

use std::io::Read;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::params::*;
use crate::simulation::states::Rgb;

#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub background: u32, // 0xRRGGBB
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            background: Rgb::WHITE.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub ticks: u64,    // number of ticks before the loop stops
    pub delay_ms: u64, // pause after each tick
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementConfig {
    pub count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub attempts: u32,
    pub seed: Option<u64>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
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

/// Top-level run configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub arena: ArenaConfig,
    pub engine: EngineConfig,
    pub placement: PlacementConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Validate and split into runtime parameters and loop settings.
    pub fn to_runtime(&self) -> Result<(Parameters, Engine)> {
        let a = &self.arena;
        let p = &self.placement;

        let parameters = Parameters {
            width: a.width,
            height: a.height,
            title: a.title.clone(),
            background: Rgb(a.background),
            count: p.count,
            radius_min: p.radius_min,
            radius_max: p.radius_max,
            speed_min: p.speed_min,
            speed_max: p.speed_max,
            attempts: p.attempts,
            seed: p.seed,
        };
        parameters.validate()?;

        let engine = Engine {
            ticks: self.engine.ticks,
            delay: Duration::from_millis(self.engine.delay_ms),
        };

        Ok((parameters, engine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_keeps_classic_constants() -> Result<()> {
        let cfg = ScenarioConfig::from_yaml_str("{}")?;
        let (params, engine) = cfg.to_runtime()?;
        assert_eq!(params.width, 640.0);
        assert_eq!(params.height, 480.0);
        assert_eq!(params.count, 10);
        assert_eq!((params.radius_min, params.radius_max), (10.0, 30.0));
        assert_eq!((params.speed_min, params.speed_max), (1.0, 5.0));
        assert_eq!(params.attempts, 3);
        assert_eq!(engine.ticks, 200);
        assert_eq!(engine.delay, Duration::from_millis(40));
        Ok(())
    }

    #[test]
    fn partial_sections_override_only_named_fields() -> Result<()> {
        let cfg = ScenarioConfig::from_yaml_str(
            "engine:\n  ticks: 5\nplacement:\n  count: 3\n  seed: 7\n",
        )?;
        let (params, engine) = cfg.to_runtime()?;
        assert_eq!(engine.ticks, 5);
        assert_eq!(engine.delay, Duration::from_millis(40));
        assert_eq!(params.count, 3);
        assert_eq!(params.seed, Some(7));
        assert_eq!(params.radius_max, 30.0);
        Ok(())
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(ScenarioConfig::from_yaml_str("engine:\n  tiks: 5\n").is_err());
    }

    #[test]
    fn radius_that_cannot_fit_is_rejected() {
        let mut cfg = ScenarioConfig::default();
        cfg.arena.height = 50.0;
        let err = cfg.to_runtime().unwrap_err();
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut cfg = ScenarioConfig::default();
        cfg.placement.count = 0;
        assert!(matches!(cfg.to_runtime(), Err(Error::InvalidParam(_))));
    }
}
