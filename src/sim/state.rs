//! Game state and simulation events
//!
//! Everything the tick mutates lives in one `GameState` owned by the host.

use serde::{Deserialize, Serialize};

use super::character::{Character, Role, SpriteId};
use super::progression::Progression;
use crate::consts::*;

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player's attack landed on roster entry `target`
    Hit {
        target: usize,
        damage: i32,
        killed: bool,
    },
    /// A wave was cleared and the next wave of the same level spawned
    WaveCleared { level: u32, wave: u32, score: u64 },
    /// The last wave of a level was cleared; wave 1 of `level` spawned
    LevelUp { level: u32, score: u64 },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Persists for the whole session; health is never restored
    pub player: Character,
    pub progression: Progression,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent ticks, drained by the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Player at the start position, level 1 wave 1 roster spawned
    pub fn new() -> Self {
        Self {
            player: Character::new(PLAYER_START_X, PLAYER_START_Y, Role::Regular),
            progression: Progression::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Reset the player's sprite and respawn the current wave's roster
    pub fn character_select(&mut self) {
        self.player.sprite = SpriteId::Ninja;
        self.progression.spawn_wave();
    }

    pub fn enemies(&self) -> &[Character] {
        &self.progression.enemies
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
