//! Calculator constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base warp speed in AU/s. Not present in any attribute table.
pub const DEFAULT_BASE_WARP_SPEED: f64 = 3.0;

/// Fraction of velocity remaining when a ship is considered aligned
pub const DEFAULT_ALIGN_VELOCITY_FRACTION: f64 = 0.25;

/// Converts agility × mass into seconds
pub const DEFAULT_ALIGN_TIME_SCALE: f64 = 1_000_000.0;

/// Tunable constants owned by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConstants {
    /// Warp speed of a hull with a multiplier of 1, in AU/s
    #[serde(default = "default_base_warp_speed")]
    pub base_warp_speed: f64,
    /// Velocity fraction used in `-ln(fraction) * agility * mass / scale`
    #[serde(default = "default_align_velocity_fraction")]
    pub align_velocity_fraction: f64,
    #[serde(default = "default_align_time_scale")]
    pub align_time_scale: f64,
}

impl Default for CalculatorConstants {
    fn default() -> Self {
        CalculatorConstants {
            base_warp_speed: DEFAULT_BASE_WARP_SPEED,
            align_velocity_fraction: DEFAULT_ALIGN_VELOCITY_FRACTION,
            align_time_scale: DEFAULT_ALIGN_TIME_SCALE,
        }
    }
}

fn default_base_warp_speed() -> f64 {
    DEFAULT_BASE_WARP_SPEED
}
fn default_align_velocity_fraction() -> f64 {
    DEFAULT_ALIGN_VELOCITY_FRACTION
}
fn default_align_time_scale() -> f64 {
    DEFAULT_ALIGN_TIME_SCALE
}

impl CalculatorConstants {
    /// Load constants from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: CalculatorConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: CalculatorConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_warp_speed.is_finite() || self.base_warp_speed <= 0.0 {
            return Err(ConfigError::ValidationError(
                "base_warp_speed must be a finite positive number".to_string(),
            ));
        }
        if !(self.align_velocity_fraction > 0.0 && self.align_velocity_fraction < 1.0) {
            return Err(ConfigError::ValidationError(
                "align_velocity_fraction must be between 0 and 1 (exclusive)".to_string(),
            ));
        }
        if !self.align_time_scale.is_finite() || self.align_time_scale <= 0.0 {
            return Err(ConfigError::ValidationError(
                "align_time_scale must be a finite positive number".to_string(),
            ));
        }
        Ok(())
    }
}
