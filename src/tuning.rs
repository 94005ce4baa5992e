//! Data-driven game balance
//!
//! Loaded from JSON; every field falls back to the built-in default when omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Balance knobs for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal paddle speed (units/sec)
    pub paddle_speed: f32,
    /// Ball velocity when first released from the paddle
    pub ball_launch_velocity: [f32; 2],
    /// Lives at the start of a run
    pub starting_lives: u32,
    /// Host clamp for a single frame delta (seconds)
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: PADDLE_SPEED,
            ball_launch_velocity: BALL_LAUNCH_VELOCITY,
            starting_lives: STARTING_LIVES,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No tuning file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.paddle_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "paddle_speed must be > 0 (got {})",
                self.paddle_speed
            )));
        }
        let [vx, vy] = self.ball_launch_velocity;
        if vx == 0.0 && vy == 0.0 {
            return Err(ConfigError::Invalid(
                "ball_launch_velocity must be non-zero".into(),
            ));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_lives must be >= 1".into()));
        }
        if !(self.max_frame_dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_frame_dt must be > 0 (got {})",
                self.max_frame_dt
            )));
        }
        Ok(())
    }

    /// Pretty JSON, for writing out a starting tuning file
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "paddle_speed": 20.0 }"#).unwrap();
        assert_eq!(tuning.paddle_speed, 20.0);
        assert_eq!(tuning.starting_lives, STARTING_LIVES);
        assert_eq!(tuning.ball_launch_velocity, BALL_LAUNCH_VELOCITY);
    }

    #[test]
    fn test_rejects_zero_lives() {
        let err = Tuning::from_json(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_launch() {
        let err = Tuning::from_json(r#"{ "ball_launch_velocity": [0.0, 0.0] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_accepts_downward_launch() {
        // A falling ball meets the paddle first, which bounces it up
        let tuning = Tuning::from_json(r#"{ "ball_launch_velocity": [5.0, -5.0] }"#).unwrap();
        assert_eq!(tuning.ball_launch_velocity, [5.0, -5.0]);
    }

    #[test]
    fn test_parse_error_surfaces() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let tuning = Tuning::load("/definitely/not/here/tuning.json").unwrap();
        assert_eq!(tuning, Tuning::default());
    }
}
