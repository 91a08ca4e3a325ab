//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Stable iteration order (roster spawn order)
//! - No rendering or platform dependencies

pub mod character;
pub mod combat;
pub mod progression;
pub mod state;
pub mod tick;

pub use character::{Character, CharacterStats, Role, SpriteId};
pub use combat::{Hit, attack, in_reach};
pub use progression::{Advance, Progression};
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, tick};
