//! Timed value transitions
//!
//! A transition interpolates a single value from `from` to `to` over a fixed
//! duration. Time is supplied by the caller in milliseconds, so the same code
//! runs under a browser clock or a test clock.

use crate::Easing;

/// Identifies one transition request. Newer ids supersede older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub id: TransitionId,
    pub from: f64,
    pub to: f64,
    pub started_at: f64,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub fn fraction_at(&self, now: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> f64 {
        let eased = self.easing.apply(self.fraction_at(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.fraction_at(now) >= 1.0
    }
}

/// Completion notification for a transition.
///
/// `finished` is false when the transition was interrupted or superseded
/// before reaching its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEnd {
    pub id: TransitionId,
    pub finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(from: f64, to: f64) -> Transition {
        Transition {
            id: TransitionId(1),
            from,
            to,
            started_at: 1000.0,
            duration_ms: 300,
            easing: Easing::Linear,
        }
    }

    #[test]
    fn test_value_at_bounds() {
        let t = linear(-120.0, -400.0);
        assert_eq!(t.value_at(500.0), -120.0);
        assert_eq!(t.value_at(1000.0), -120.0);
        assert_eq!(t.value_at(1300.0), -400.0);
        assert_eq!(t.value_at(9000.0), -400.0);
    }

    #[test]
    fn test_value_at_midpoint() {
        let t = linear(-30.0, 0.0);
        assert!((t.value_at(1150.0) - -15.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_finished() {
        let t = linear(-30.0, 0.0);
        assert!(!t.is_finished(1299.0));
        assert!(t.is_finished(1300.0));
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let t = Transition {
            duration_ms: 0,
            ..linear(-50.0, 0.0)
        };
        assert!(t.is_finished(1000.0));
        assert_eq!(t.value_at(1000.0), 0.0);
    }
}
