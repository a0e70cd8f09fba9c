//! Reducer state behind `SwipeableRow`
//!
//! Pointer events, frame ticks and transition completions all arrive here as
//! actions, so the row is only ever mutated from the component's own update
//! path.

use std::rc::Rc;

use memo_common::{PanTracker, SwipeConfig, SwipeOutcome, SwipeRow, TransitionEnd};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowAction {
    /// Pointer went down at this x position
    DragStart(f64),
    /// Pointer moved to this x position
    DragMove(f64),
    /// Pointer released at this timestamp (ms)
    DragEnd(f64),
    /// Frame tick at this timestamp (ms)
    Tick(f64),
    Settled(TransitionEnd),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeRowState {
    row: SwipeRow,
    pan: PanTracker,
    deletions: u32,
}

impl SwipeRowState {
    pub fn new(viewport_width: f64, config: SwipeConfig) -> Self {
        Self {
            row: SwipeRow::new(viewport_width, config),
            pan: PanTracker::new(),
            deletions: 0,
        }
    }

    pub fn row(&self) -> &SwipeRow {
        &self.row
    }

    /// Whether a click on the title should reach `on_press`
    pub fn pressable(&self) -> bool {
        self.row.press().is_some()
    }

    /// Number of deletions requested; never exceeds one
    pub fn deletions(&self) -> u32 {
        self.deletions
    }
}

impl Reducible for SwipeRowState {
    type Action = RowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            RowAction::DragStart(x) => {
                next.pan.begin(x);
                next.row.begin_drag();
            }
            RowAction::DragMove(x) => {
                let applied = next
                    .pan
                    .translation(x)
                    .map(|translation| next.row.update_drag(translation))
                    .unwrap_or(false);
                if !applied {
                    return self;
                }
            }
            RowAction::DragEnd(now) => {
                if !next.pan.end() {
                    return self;
                }
                next.row.end_drag(now);
            }
            RowAction::Tick(now) => {
                if next.row.active_transition().is_none() {
                    return self;
                }
                if let Some(end) = next.row.tick(now) {
                    return Rc::new(next).reduce(RowAction::Settled(end));
                }
            }
            RowAction::Settled(end) => match next.row.settle(end) {
                Some(SwipeOutcome::Delete) => next.deletions += 1,
                Some(_) => {}
                None => return self,
            },
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memo_common::SwipePhase;

    fn state(width: f64) -> Rc<SwipeRowState> {
        Rc::new(SwipeRowState::new(width, SwipeConfig::default()))
    }

    fn apply(state: Rc<SwipeRowState>, actions: &[RowAction]) -> Rc<SwipeRowState> {
        actions
            .iter()
            .fold(state, |state, action| state.reduce(*action))
    }

    #[test]
    fn test_drag_moves_follow_pointer() {
        let state = apply(
            state(400.0),
            &[RowAction::DragStart(350.0), RowAction::DragMove(300.0)],
        );
        assert_eq!(state.row().offset(), -50.0);
        assert_eq!(state.row().phase(), SwipePhase::Dragging);
    }

    #[test]
    fn test_rightward_move_is_noop() {
        let before = apply(
            state(400.0),
            &[RowAction::DragStart(350.0), RowAction::DragMove(340.0)],
        );
        let after = before.clone().reduce(RowAction::DragMove(355.0));
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.row().offset(), -10.0);
    }

    #[test]
    fn test_move_without_start_is_noop() {
        let before = state(400.0);
        let after = before.clone().reduce(RowAction::DragMove(100.0));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_swipe_past_threshold_requests_one_deletion() {
        let state = apply(
            state(400.0),
            &[
                RowAction::DragStart(390.0),
                RowAction::DragMove(380.0),
                RowAction::DragMove(340.0),
                RowAction::DragMove(270.0),
                RowAction::DragEnd(1000.0),
                RowAction::Tick(1100.0),
            ],
        );
        assert_eq!(state.row().phase(), SwipePhase::Committing);
        assert_eq!(state.deletions(), 0);

        let state = apply(state, &[RowAction::Tick(1300.0)]);
        assert_eq!(state.row().offset(), -400.0);
        assert_eq!(state.row().phase(), SwipePhase::Deleted);
        assert_eq!(state.deletions(), 1);

        let state = apply(state, &[RowAction::Tick(1400.0), RowAction::Tick(2000.0)]);
        assert_eq!(state.deletions(), 1);
    }

    #[test]
    fn test_short_swipe_returns_to_rest() {
        let state = apply(
            state(400.0),
            &[
                RowAction::DragStart(390.0),
                RowAction::DragMove(380.0),
                RowAction::DragMove(360.0),
                RowAction::DragEnd(0.0),
                RowAction::Tick(150.0),
                RowAction::Tick(300.0),
            ],
        );
        assert_eq!(state.row().offset(), 0.0);
        assert_eq!(state.row().phase(), SwipePhase::Idle);
        assert_eq!(state.deletions(), 0);
    }

    #[test]
    fn test_regrab_during_commit_cancels_deletion() {
        let state = apply(
            state(400.0),
            &[
                RowAction::DragStart(390.0),
                RowAction::DragMove(200.0),
                RowAction::DragEnd(0.0),
                RowAction::Tick(100.0),
                RowAction::DragStart(250.0),
                RowAction::DragMove(240.0),
                RowAction::DragEnd(200.0),
                RowAction::Tick(500.0),
            ],
        );
        assert_eq!(state.row().phase(), SwipePhase::Idle);
        assert_eq!(state.deletions(), 0);
    }

    #[test]
    fn test_click_after_swipe_is_not_a_press() {
        let state = apply(
            state(400.0),
            &[
                RowAction::DragStart(390.0),
                RowAction::DragMove(240.0),
                RowAction::DragEnd(0.0),
            ],
        );
        assert_eq!(state.row().offset(), -150.0);
        assert_eq!(state.row().phase(), SwipePhase::Committing);
        assert!(!state.pressable());

        let state = apply(state, &[RowAction::Tick(300.0)]);
        assert_eq!(state.deletions(), 1);
        assert!(!state.pressable());
    }

    #[test]
    fn test_tap_is_a_press() {
        let state = apply(
            state(400.0),
            &[
                RowAction::DragStart(200.0),
                RowAction::DragMove(196.0),
                RowAction::DragEnd(0.0),
            ],
        );
        assert_eq!(state.row().offset(), -4.0);
        assert!(state.pressable());
    }

    #[test]
    fn test_unfinished_settle_is_noop() {
        let before = apply(
            state(400.0),
            &[
                RowAction::DragStart(390.0),
                RowAction::DragMove(200.0),
                RowAction::DragEnd(0.0),
            ],
        );
        let id = before.row().active_transition().unwrap().id;
        let after = before
            .clone()
            .reduce(RowAction::Settled(TransitionEnd { id, finished: false }));
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.deletions(), 0);
    }
}
