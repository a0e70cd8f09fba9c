//! Swipe row configuration

use serde::{Deserialize, Serialize};

use crate::{Easing, Error, Result};

/// Tunables for a swipeable row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Fraction of the viewport width a release must pass to commit
    pub commit_ratio: f64,
    pub duration_ms: u32,
    pub easing: Easing,
    /// Width of the delete affordance in px
    pub action_width: f64,
    pub action_label: String,
    pub frame_interval_ms: u32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_ratio: 0.25,
            duration_ms: 300,
            easing: Easing::default(),
            action_width: 100.0,
            action_label: "Delete".to_string(),
            frame_interval_ms: 16,
        }
    }
}

impl SwipeConfig {
    /// Parse a JSON config, filling missing fields with defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SwipeConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.commit_ratio > 0.0 && self.commit_ratio <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "commit_ratio must be in (0, 1], got {}",
                self.commit_ratio
            )));
        }

        if self.duration_ms == 0 {
            return Err(Error::InvalidConfig(
                "duration_ms must be greater than zero".to_string(),
            ));
        }

        if !self.action_width.is_finite() || self.action_width < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "action_width must be a non-negative number, got {}",
                self.action_width
            )));
        }

        if self.frame_interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "frame_interval_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Offset a release has to go below to commit the deletion
    pub fn threshold(&self, viewport_width: f64) -> f64 {
        -viewport_width * self.commit_ratio
    }
}
