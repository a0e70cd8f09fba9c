//! Easing curves for timed transitions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic ease in and out
    #[default]
    InOutQuad,
    /// Cubic ease out
    EaseOut,
}

impl Easing {
    /// Map a linear fraction to an eased one. Input is clamped to [0, 1].
    pub fn apply(&self, fraction: f64) -> f64 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}
