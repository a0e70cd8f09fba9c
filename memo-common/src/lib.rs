//! Platform-independent core of the memo swipeable row
//!
//! Everything here is plain Rust so the gesture and animation rules can be
//! exercised without a browser. `memo-mobile` wires these types to Yew.

pub mod config;
pub mod easing;
pub mod gesture;
pub mod swipe;
pub mod theme;
pub mod transition;

pub use config::SwipeConfig;
pub use easing::Easing;
pub use gesture::PanTracker;
pub use swipe::{SwipeOutcome, SwipePhase, SwipeRow, PAN_SLOP_PX};
pub use theme::ColorRole;
pub use transition::{Transition, TransitionEnd, TransitionId};

/// Errors raised while building a swipe row configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
