//! Reusable mobile UI components

pub mod delete_action;
pub mod row_state;
pub mod swipeable_row;

pub use delete_action::DeleteAction;
pub use row_state::{RowAction, SwipeRowState};
pub use swipeable_row::SwipeableRow;
