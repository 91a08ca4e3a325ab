//! Wave and level progression
//!
//! Each wave fields `wave + 1` fresh enemies. Clearing a wave scores
//! SCORE_PER_WAVE and advances to the next wave, or to wave 1 of the next
//! level after MAX_WAVES. There is no terminal state.

use serde::{Deserialize, Serialize};

use super::character::{Character, Role};
use crate::consts::*;

/// What a wave clear led to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    /// Next wave within the same level
    NextWave { level: u32, wave: u32 },
    /// First wave of a new level
    NextLevel { level: u32 },
}

/// Level, wave, score and the live enemy roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub wave: u32,
    pub max_waves: u32,
    pub score: u64,
    /// Current wave's enemies in spawn order
    pub enemies: Vec<Character>,
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

impl Progression {
    /// Level 1, wave 1, with its roster already spawned
    pub fn new() -> Self {
        let mut progression = Self {
            level: 1,
            wave: 1,
            max_waves: MAX_WAVES,
            score: 0,
            enemies: Vec::new(),
        };
        progression.spawn_wave();
        progression
    }

    /// Enemy count for a wave
    pub fn roster_size(wave: u32) -> usize {
        wave as usize + 1
    }

    /// Replace the roster with fresh regular enemies for the current wave
    pub fn spawn_wave(&mut self) {
        let count = Self::roster_size(self.wave);
        self.enemies = (0..count)
            .map(|i| {
                Character::new(
                    ENEMY_SPAWN_X + i as f32 * ENEMY_SPAWN_SPACING,
                    ENEMY_SPAWN_Y,
                    Role::Regular,
                )
            })
            .collect();
        log::debug!(
            "Spawned {} enemies for level {} wave {}",
            count,
            self.level,
            self.wave
        );
    }

    /// Every enemy in the roster is dead
    pub fn wave_cleared(&self) -> bool {
        self.enemies.iter().all(|e| !e.alive())
    }

    /// First living enemy in roster order
    pub fn first_alive_mut(&mut self) -> Option<(usize, &mut Character)> {
        self.enemies.iter_mut().enumerate().find(|(_, e)| e.alive())
    }

    /// Score the cleared wave and move on. Call only when `wave_cleared`.
    pub fn advance(&mut self) -> Advance {
        self.score += SCORE_PER_WAVE;
        let advance = if self.wave < self.max_waves {
            self.wave += 1;
            Advance::NextWave {
                level: self.level,
                wave: self.wave,
            }
        } else {
            self.level += 1;
            self.wave = 1;
            Advance::NextLevel { level: self.level }
        };
        self.spawn_wave();
        advance
    }

    /// Advance if the wave is cleared
    pub fn check_clear(&mut self) -> Option<Advance> {
        self.wave_cleared().then(|| self.advance())
    }
}
