//! Gameplay tunables, loaded from an optional TOML file.
//!
//! Every field defaults to its compile-time constant in [`crate::constants`], so
//! a file only needs the keys it changes. Restitution of asteroid bounces is not
//! tunable.

use std::path::{Path, PathBuf};
use serde::Deserialize;
use thiserror::Error;
use crate::constants::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error
    },
    #[error("{name} = {value} is outside {expected}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Screen ────────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,

    // ── Asteroids ─────────────────────────────────────────────────────────────
    pub initial_asteroids: usize,
    pub head_on_pair: bool,
    pub asteroid_start_health: i32,

    // ── Ship ──────────────────────────────────────────────────────────────────
    pub ship_start_health: i32,
    pub ship_hit_damage: i32,
    pub ship_immune_duration: f32,
    pub ship_shot_cool_down: f32,
    /// Ship/asteroid contact only tints hit-shapes unless this is set.
    pub ship_takes_damage: bool,

    // ── Projectiles ───────────────────────────────────────────────────────────
    pub projectile_damage: i32,
    pub projectile_radius: f32,
    pub projectile_speed: f32,

    // ── Headless run ──────────────────────────────────────────────────────────
    pub seed: u64,
    pub ticks: u32,
    pub frame_dt: f32,
    pub output_path: PathBuf
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            initial_asteroids: INITIAL_ASTEROID_COUNT,
            head_on_pair: true,
            asteroid_start_health: ASTEROID_START_HEALTH,
            ship_start_health: SHIP_START_HEALTH,
            ship_hit_damage: SHIP_HIT_DAMAGE,
            ship_immune_duration: SHIP_IMMUNE_DURATION,
            ship_shot_cool_down: SHIP_SHOT_COOL_DOWN,
            ship_takes_damage: false,
            projectile_damage: PROJECTILE_DAMAGE,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            seed: 0x5eed,
            ticks: 600,
            frame_dt: 1.0 / 60.0,
            output_path: PathBuf::from("frame.png")
        }
    }
}

impl GameConfig {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "config file not found; using compiled defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path: path.to_owned(), source })
        };
        let config = Self::from_toml(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse { path: path.to_owned(), source },
            other => other
        })?;
        tracing::info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.frame_size()?;
        check_positive("projectile_radius", self.projectile_radius as f64)?;
        check_positive("frame_dt", self.frame_dt as f64)?;
        if self.ship_shot_cool_down < 0.0 {
            return Err(ConfigError::OutOfRange {
                name: "ship_shot_cool_down",
                value: self.ship_shot_cool_down as f64,
                expected: "[0, inf)"
            });
        }
        Ok(())
    }
}

impl GameConfig {
    /// Screen size in whole pixels, the size of the rendered frame.
    pub fn frame_size(&self) -> Result<(u16, u16), ConfigError> {
        Ok((
            check_pixels("screen_width", self.screen_width)?,
            check_pixels("screen_height", self.screen_height)?
        ))
    }
}

fn check_pixels(name: &'static str, value: f32) -> Result<u16, ConfigError> {
    let out_of_range = ConfigError::OutOfRange {
        name,
        value: value as f64,
        expected: "a whole number in [1, 65535]"
    };
    if value.fract() != 0.0 || value < 1.0 {
        return Err(out_of_range);
    }
    u16::try_from(value as u32).map_err(|_| out_of_range)
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value, expected: "(0, inf)" })
    }
}
