//! Reveal-to-delete swipe state machine
//!
//! A row starts at rest with offset 0. Leftward drags move it, rightward
//! drags are ignored, and on release the row either slides fully off screen
//! (committing the deletion) or slides back to rest. The deletion is only
//! reported once the off-screen transition has actually completed and its
//! completion has been handed back through [`SwipeRow::settle`].

use tracing::{debug, info, trace};

use crate::{SwipeConfig, Transition, TransitionEnd, TransitionId};

/// Travel (px) after which a drag counts as a pan and no longer as a tap
pub const PAN_SLOP_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    Committing,
    Returning,
    /// Deletion has been requested; the owner is expected to unmount the row
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Invoke the delete callback
    Delete,
    /// Row is back at rest
    Rested,
    /// Invoke the press callback
    Press,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeRow {
    config: SwipeConfig,
    viewport_width: f64,
    offset: f64,
    phase: SwipePhase,
    transition: Option<Transition>,
    /// Transition that reached its target and awaits `settle`
    completed: Option<TransitionId>,
    /// Current gesture travelled past the tap slop
    panned: bool,
    next_id: u64,
}

impl SwipeRow {
    pub fn new(viewport_width: f64, config: SwipeConfig) -> Self {
        Self {
            config,
            viewport_width: viewport_width.max(0.0),
            offset: 0.0,
            phase: SwipePhase::Idle,
            transition: None,
            completed: None,
            panned: false,
            next_id: 0,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold(self.viewport_width)
    }

    pub fn active_transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Start a new drag. A transition still in flight is superseded and
    /// reported as unfinished.
    pub fn begin_drag(&mut self) -> Option<TransitionEnd> {
        if self.phase == SwipePhase::Deleted {
            trace!("drag start ignored, row already deleted");
            return None;
        }

        let superseded = self.stop_transition();
        self.completed = None;
        self.panned = false;
        self.set_phase(SwipePhase::Dragging);
        superseded
    }

    /// Apply the horizontal translation of the current drag.
    ///
    /// Only leftward (negative) translations are applied.
    pub fn update_drag(&mut self, translation: f64) -> bool {
        if self.phase != SwipePhase::Dragging {
            return false;
        }
        if !translation.is_finite() || translation >= 0.0 {
            trace!(translation, offset = self.offset, "drag update not applied");
            return false;
        }

        self.offset = translation;
        if translation < -PAN_SLOP_PX {
            self.panned = true;
        }
        true
    }

    /// Release the drag and start the transition it calls for
    pub fn end_drag(&mut self, now: f64) -> Option<&Transition> {
        if self.phase != SwipePhase::Dragging {
            return None;
        }

        let (phase, target) = if self.offset < self.threshold() {
            (SwipePhase::Committing, -self.viewport_width)
        } else {
            (SwipePhase::Returning, 0.0)
        };

        self.next_id += 1;
        let transition = Transition {
            id: TransitionId(self.next_id),
            from: self.offset,
            to: target,
            started_at: now,
            duration_ms: self.config.duration_ms,
            easing: self.config.easing,
        };

        debug!(
            offset = self.offset,
            threshold = self.threshold(),
            target,
            "drag released"
        );
        self.set_phase(phase);
        self.transition = Some(transition);
        self.transition.as_ref()
    }

    /// Advance the active transition to `now`.
    ///
    /// Returns the completion notification once the transition has reached
    /// its target. The notification still has to go through `settle`.
    pub fn tick(&mut self, now: f64) -> Option<TransitionEnd> {
        let transition = self.transition.as_ref()?;

        if transition.is_finished(now) {
            let id = transition.id;
            self.offset = transition.to;
            self.transition = None;
            self.completed = Some(id);
            return Some(TransitionEnd { id, finished: true });
        }

        self.offset = transition.value_at(now).min(0.0);
        None
    }

    /// Handle a completion notification in the owning context.
    ///
    /// Unfinished or stale notifications never lead to a deletion.
    pub fn settle(&mut self, end: TransitionEnd) -> Option<SwipeOutcome> {
        if !end.finished {
            trace!(id = end.id.0, "interrupted transition settled");
            return None;
        }
        if self.completed != Some(end.id) {
            trace!(id = end.id.0, "stale transition completion ignored");
            return None;
        }
        self.completed = None;

        match self.phase {
            SwipePhase::Committing => {
                info!(viewport_width = self.viewport_width, "row swiped off, deleting");
                self.set_phase(SwipePhase::Deleted);
                Some(SwipeOutcome::Delete)
            }
            SwipePhase::Returning => {
                self.set_phase(SwipePhase::Idle);
                Some(SwipeOutcome::Rested)
            }
            _ => None,
        }
    }

    /// Taps are honoured at any offset, unless the last gesture panned
    pub fn press(&self) -> Option<SwipeOutcome> {
        if self.panned {
            trace!(offset = self.offset, "tap after pan ignored");
            return None;
        }
        Some(SwipeOutcome::Press)
    }

    fn stop_transition(&mut self) -> Option<TransitionEnd> {
        self.transition.take().map(|t| {
            debug!(id = t.id.0, offset = self.offset, "transition interrupted");
            TransitionEnd {
                id: t.id,
                finished: false,
            }
        })
    }

    fn set_phase(&mut self, phase: SwipePhase) {
        if self.phase != phase {
            debug!(from = ?self.phase, to = ?phase, "swipe phase changed");
            self.phase = phase;
        }
    }
}
