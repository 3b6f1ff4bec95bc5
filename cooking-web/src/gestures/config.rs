//! Gesture thresholds and timings
//!
//! Distances are in normalized frame units, durations in milliseconds.
//! The defaults are one calibrated set; JS may override any subset as JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gesture config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    #[error("{what}: {lower} must be below {upper}")]
    BadWindow {
        what: &'static str,
        lower: f64,
        upper: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Thumb tip to index tip distance below which the hand is pinching.
    pub pinch_threshold: f32,
    /// Shortest pinch-drag that counts as a flick (ms, exclusive).
    pub flick_min_ms: f64,
    /// Longest pinch-drag that counts as a flick (ms, exclusive).
    pub flick_max_ms: f64,
    /// Dominant-axis displacement a flick must exceed.
    pub flick_min_distance: f32,
    /// Pinch-drag lockout after a flick fired.
    pub pinch_cooldown_ms: f64,

    /// Finger is extended when tip-wrist > ratio * base-wrist.
    pub extended_ratio: f32,
    /// Finger is folded (fist) when tip-wrist < ratio * base-wrist.
    pub folded_ratio: f32,
    pub open_palm_min_fingers: usize,
    pub fist_min_fingers: usize,

    /// Thumb tip must be at least this far from the wrist.
    pub thumbs_up_min_thumb: f32,
    /// Other fingertip counts as folded when closer than ratio * thumb distance.
    pub thumbs_up_folded_ratio: f32,
    pub thumbs_up_min_folded: usize,

    pub open_palm_delay_ms: f64,
    pub open_palm_hold_ms: f64,
    pub thumbs_up_hold_ms: f64,
    pub fist_hold_ms: f64,
    /// Lockout shared by all static poses after any of them completes.
    pub pose_cooldown_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.03,
            flick_min_ms: 80.0,
            flick_max_ms: 1500.0,
            flick_min_distance: 0.06,
            pinch_cooldown_ms: 600.0,
            extended_ratio: 1.15,
            folded_ratio: 0.85,
            open_palm_min_fingers: 4,
            fist_min_fingers: 4,
            thumbs_up_min_thumb: 0.3,
            thumbs_up_folded_ratio: 0.7,
            thumbs_up_min_folded: 2,
            open_palm_delay_ms: 500.0,
            open_palm_hold_ms: 3000.0,
            thumbs_up_hold_ms: 3000.0,
            fist_hold_ms: 5000.0,
            pose_cooldown_ms: 900.0,
        }
    }
}

impl GestureConfig {
    /// Parse a (possibly partial) JSON object; missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GestureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("pinch_threshold", self.pinch_threshold as f64),
            ("flick_max_ms", self.flick_max_ms),
            ("flick_min_distance", self.flick_min_distance as f64),
            ("extended_ratio", self.extended_ratio as f64),
            ("folded_ratio", self.folded_ratio as f64),
            ("thumbs_up_min_thumb", self.thumbs_up_min_thumb as f64),
            ("thumbs_up_folded_ratio", self.thumbs_up_folded_ratio as f64),
            ("open_palm_hold_ms", self.open_palm_hold_ms),
            ("thumbs_up_hold_ms", self.thumbs_up_hold_ms),
            ("fist_hold_ms", self.fist_hold_ms),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("flick_min_ms", self.flick_min_ms),
            ("pinch_cooldown_ms", self.pinch_cooldown_ms),
            ("open_palm_delay_ms", self.open_palm_delay_ms),
            ("pose_cooldown_ms", self.pose_cooldown_ms),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let counts = [
            ("open_palm_min_fingers", self.open_palm_min_fingers, 5),
            ("fist_min_fingers", self.fist_min_fingers, 5),
            ("thumbs_up_min_folded", self.thumbs_up_min_folded, 4),
        ];
        for (field, value, max) in counts {
            if !(1..=max).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value, min: 1, max });
            }
        }

        if self.flick_min_ms >= self.flick_max_ms {
            return Err(ConfigError::BadWindow {
                what: "flick window",
                lower: self.flick_min_ms,
                upper: self.flick_max_ms,
            });
        }
        if self.open_palm_delay_ms >= self.open_palm_hold_ms {
            return Err(ConfigError::BadWindow {
                what: "open palm hold",
                lower: self.open_palm_delay_ms,
                upper: self.open_palm_hold_ms,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GestureConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GestureConfig::from_json(r#"{ "pinch_threshold": 0.05, "fist_hold_ms": 4000 }"#).unwrap();
        assert_eq!(config.pinch_threshold, 0.05);
        assert_eq!(config.fist_hold_ms, 4000.0);
        assert_eq!(config.open_palm_hold_ms, 3000.0);
        assert_eq!(config.pose_cooldown_ms, 900.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GestureConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(GestureConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GestureConfig::from_json("{ pinch"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GestureConfig::from_json(r#"{ "pinch_threshold": 0 }"#),
            Err(ConfigError::NotPositive { field: "pinch_threshold", .. })
        ));
        assert!(matches!(
            GestureConfig::from_json(r#"{ "pose_cooldown_ms": -1 }"#),
            Err(ConfigError::Negative { field: "pose_cooldown_ms", .. })
        ));
        assert!(matches!(
            GestureConfig::from_json(r#"{ "fist_min_fingers": 6 }"#),
            Err(ConfigError::OutOfRange { field: "fist_min_fingers", .. })
        ));
        assert!(matches!(
            GestureConfig::from_json(r#"{ "open_palm_delay_ms": 3000 }"#),
            Err(ConfigError::BadWindow { .. })
        ));
        assert!(matches!(
            GestureConfig::from_json(r#"{ "flick_min_ms": 2000 }"#),
            Err(ConfigError::BadWindow { .. })
        ));
    }
}
