//! Scoring module - point rules for matches, mismatches and hints
//!
//! The score has no floor: a run of mismatches can drive it negative.
//! Hints are only allowed while the score covers their cost.

use tui_memory_types::{HINT_COST, MATCH_REWARD, MISMATCH_PENALTY};

/// Anything that moves the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    Match,
    Mismatch,
    Hint,
}

impl ScoreEvent {
    /// Signed score delta for this event
    pub fn delta(&self) -> i32 {
        match self {
            ScoreEvent::Match => MATCH_REWARD,
            ScoreEvent::Mismatch => -MISMATCH_PENALTY,
            ScoreEvent::Hint => -HINT_COST,
        }
    }
}

/// Apply a score event, saturating at the integer bounds.
pub fn apply(score: i32, event: ScoreEvent) -> i32 {
    score.saturating_add(event.delta())
}

/// Check whether a hint can be paid for
pub fn can_afford_hint(score: i32) -> bool {
    score >= HINT_COST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas() {
        assert_eq!(ScoreEvent::Match.delta(), 10);
        assert_eq!(ScoreEvent::Mismatch.delta(), -5);
        assert_eq!(ScoreEvent::Hint.delta(), -5);
    }

    #[test]
    fn test_score_goes_negative() {
        let score = apply(0, ScoreEvent::Mismatch);
        assert_eq!(score, -5);
        assert_eq!(apply(score, ScoreEvent::Mismatch), -10);
    }

    #[test]
    fn test_apply_saturates() {
        assert_eq!(apply(i32::MAX, ScoreEvent::Match), i32::MAX);
        assert_eq!(apply(i32::MIN, ScoreEvent::Hint), i32::MIN);
    }

    #[test]
    fn test_hint_affordability_threshold() {
        assert!(!can_afford_hint(-5));
        assert!(!can_afford_hint(4));
        assert!(can_afford_hint(5));
        assert!(can_afford_hint(10));
    }
}
