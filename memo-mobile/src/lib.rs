//! Memo Mobile UI
//!
//! Touch-optimized memo list components built with Yew. The list screen
//! itself lives with the caller; this crate provides the swipeable row that
//! reveals a delete action and reports deletions back to its owner.

pub mod components;
pub mod config;

pub use components::{DeleteAction, SwipeableRow};
pub use config::load_swipe_config;
pub use memo_common::SwipeConfig;
