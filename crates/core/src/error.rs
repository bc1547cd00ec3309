//! Error taxonomy for the game core.
//!
//! Player misclicks are not errors: selecting a missing or already resolved
//! tile is a silent no-op. Only configuration problems and unaffordable hints
//! are reported.

use thiserror::Error;

/// Errors surfaced by [`GameConfig`](crate::GameConfig) and
/// [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: grid size {grid_size}, time limit {time_limit}s: {reason}")]
    InvalidConfiguration {
        grid_size: usize,
        time_limit: u32,
        reason: &'static str,
    },

    #[error("You need at least {required} points to use a hint.")]
    InsufficientScore { score: i32, required: i32 },
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_score_reads_as_player_message() {
        let err = GameError::InsufficientScore {
            score: 4,
            required: 5,
        };
        assert_eq!(err.to_string(), "You need at least 5 points to use a hint.");
    }

    #[test]
    fn invalid_configuration_names_the_values() {
        let err = GameError::InvalidConfiguration {
            grid_size: 7,
            time_limit: 30,
            reason: "grid size must be even",
        };
        let msg = err.to_string();
        assert!(msg.contains("grid size 7"));
        assert!(msg.contains("must be even"));
    }
}
