use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Reporting configuration shared by the hub, the coordinator and every
/// installed window callback.
///
/// Thresholds are in density-independent units and get scaled per screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub dsn: Option<String>,
    pub enable_user_interaction_breadcrumbs: bool,
    pub max_breadcrumbs: usize,
    /// Movement (dp) beyond which a touch stops being a tap.
    pub touch_slop_dp: f32,
    /// Longest press (ms) still reported as a tap.
    pub tap_timeout_ms: u64,
    /// Release velocity (dp/s) at which a scroll becomes a swipe.
    pub min_fling_velocity_dp: f32,
    /// Optional classes present in the host process.
    pub available_classes: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dsn: None,
            enable_user_interaction_breadcrumbs: true,
            max_breadcrumbs: 100,
            touch_slop_dp: 8.0,
            tap_timeout_ms: 500,
            min_fling_velocity_dp: 50.0,
            available_classes: vec![crate::platform::GESTURE_DETECTOR_CLASS.to_string()],
        }
    }
}

impl Options {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let options: Options = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_breadcrumbs == 0 {
            return Err(ConfigError::Invalid("max_breadcrumbs must be at least 1".into()));
        }
        // NaN fails both comparisons
        if !(self.touch_slop_dp >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "touch_slop_dp must be non-negative, got {}",
                self.touch_slop_dp
            )));
        }
        if !(self.min_fling_velocity_dp >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_fling_velocity_dp must be non-negative, got {}",
                self.min_fling_velocity_dp
            )));
        }
        Ok(())
    }
}
