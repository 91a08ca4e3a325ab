//! Error types
//!
//! Gameplay precondition failures (out of range, dead target) are silent
//! no-ops, not errors. Only setup and construction problems surface here.

use thiserror::Error;

/// Errors raised while building characters or wiring the game loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// Character stats that cannot describe a living combatant
    #[error("invalid character stats: max health {max_health}, damage {damage_per_hit}")]
    InvalidStats {
        /// Requested health pool
        max_health: i32,
        /// Requested damage per hit
        damage_per_hit: i32,
    },
    /// Spawn position is NaN or infinite
    #[error("invalid spawn position ({x}, {y})")]
    InvalidPosition {
        /// Requested x
        x: f32,
        /// Requested y
        y: f32,
    },
    /// A collaborator was not supplied before the loop started
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),
    /// Browser page wiring failed
    #[error("dom error: {0}")]
    Dom(String),
}

/// Result type for setup operations.
pub type GameResult<T> = Result<T, GameError>;
