//! Combatant entity
//!
//! Position, health, animation phase and alive status for the player or an
//! enemy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, GameResult};

/// Combatant role; selects health pool and damage per hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Regular,
    Boss,
}

impl Role {
    /// Stat lookup for this role
    pub const fn stats(self) -> CharacterStats {
        match self {
            Role::Regular => CharacterStats {
                max_health: REGULAR_MAX_HEALTH,
                damage_per_hit: REGULAR_DAMAGE,
            },
            Role::Boss => CharacterStats {
                max_health: BOSS_MAX_HEALTH,
                damage_per_hit: BOSS_DAMAGE,
            },
        }
    }

    /// Sprite sheet used when drawing this role
    pub const fn sprite(self) -> SpriteId {
        match self {
            Role::Regular => SpriteId::Ninja,
            Role::Boss => SpriteId::Boss,
        }
    }
}

/// Fixed combat stats of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub max_health: i32,
    pub damage_per_hit: i32,
}

impl CharacterStats {
    pub fn validate(&self) -> GameResult<()> {
        if self.max_health <= 0 || self.damage_per_hit < 0 {
            return Err(GameError::InvalidStats {
                max_health: self.max_health,
                damage_per_hit: self.damage_per_hit,
            });
        }
        Ok(())
    }
}

/// Opaque sprite handle, resolved to an image by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Ninja,
    Boss,
}

/// A combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub pos: Vec2,
    pub role: Role,
    pub sprite: SpriteId,
    /// Current health; may go negative on the killing blow
    health: i32,
    stats: CharacterStats,
    alive: bool,
    /// Column in the sprite strip, always < ANIMATION_FRAMES
    frame: u8,
    /// Ticks since the last frame step, always < ANIMATION_DELAY
    frame_delay: u32,
}

impl Character {
    /// Create a character with its role's stats
    pub fn new(x: f32, y: f32, role: Role) -> Self {
        Self {
            pos: Vec2::new(x, y),
            role,
            sprite: role.sprite(),
            health: role.stats().max_health,
            stats: role.stats(),
            alive: true,
            frame: 0,
            frame_delay: 0,
        }
    }

    /// Create a character with custom stats, rejecting unusable ones
    pub fn with_stats(x: f32, y: f32, role: Role, stats: CharacterStats) -> GameResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GameError::InvalidPosition { x, y });
        }
        stats.validate()?;
        Ok(Self {
            health: stats.max_health,
            stats,
            ..Self::new(x, y, role)
        })
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Overwrite health, applying death if it drops to zero or below
    #[cfg(test)]
    pub(crate) fn set_health(&mut self, health: i32) {
        if self.alive {
            self.health = health;
            self.alive = health > 0;
        }
    }

    pub fn max_health(&self) -> i32 {
        self.stats.max_health
    }

    pub fn damage_per_hit(&self) -> i32 {
        self.stats.damage_per_hit
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    /// Health as a fraction of max, clamped to [0, 1] for display
    pub fn health_fraction(&self) -> f32 {
        (self.health as f32 / self.stats.max_health as f32).clamp(0.0, 1.0)
    }

    /// Health clamped at zero for display
    pub fn display_health(&self) -> i32 {
        self.health.max(0)
    }

    /// Subtract health; dying is permanent. Returns true if this call killed.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.alive = false;
            return true;
        }
        false
    }

    /// Advance the sprite frame every ANIMATION_DELAY calls.
    ///
    /// Runs for dead characters too.
    pub fn advance_animation(&mut self) {
        self.frame_delay = (self.frame_delay + 1) % ANIMATION_DELAY;
        if self.frame_delay == 0 {
            self.frame = (self.frame + 1) % ANIMATION_FRAMES;
        }
    }
}
