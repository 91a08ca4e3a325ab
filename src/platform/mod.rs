//! Platform abstraction layer
//!
//! The simulation talks to the outside world through three collaborators:
//! - `Renderer`: draws characters, health bars and the HUD
//! - `InputSource`: produces one `TickInput` per tick
//! - `AudioCue`: plays the hit cue and progression stingers
//!
//! Browser implementations live in `renderer` and `audio`; `headless` holds
//! display-free ones for the native binary and tests.

pub mod headless;
pub mod input;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::sim::{Character, GameState, TickInput};

pub use headless::{CountingAudio, DrawCall, HeadlessRenderer};
pub use input::InputState;

/// Values shown in the HUD text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub level: u32,
    pub wave: u32,
    pub max_waves: u32,
    pub health: i32,
    pub score: u64,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            level: state.progression.level,
            wave: state.progression.wave,
            max_waves: state.progression.max_waves,
            health: state.player.display_health(),
            score: state.progression.score,
        }
    }

    /// HUD lines, top to bottom
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Level: {}  Wave: {}/{}", self.level, self.wave, self.max_waves),
            format!("Player HP: {}", self.health),
            format!("Score: {}", self.score),
        ]
    }
}

/// Draws a frame. Reads state only; never feeds back into the simulation.
pub trait Renderer {
    fn clear_frame(&mut self);
    fn draw_character(&mut self, character: &Character);
    fn draw_health_bar(&mut self, character: &Character);
    fn draw_ui(&mut self, hud: &Hud);
    /// On-screen touch controls overlay
    fn draw_touch_buttons(&mut self) {}
}

/// Source of per-tick input
pub trait InputSource {
    /// Current intents
    fn snapshot(&mut self) -> TickInput;
    /// Clear the one-shot attack request after a tick has used it
    fn consume_attack(&mut self);
}

/// Audio feedback
pub trait AudioCue {
    /// Restart the hit cue from the beginning and play it
    fn play_hit(&mut self);
    fn play_wave_clear(&mut self) {}
    fn play_level_up(&mut self) {}
}

impl<T: InputSource> InputSource for Rc<RefCell<T>> {
    fn snapshot(&mut self) -> TickInput {
        self.borrow_mut().snapshot()
    }

    fn consume_attack(&mut self) {
        self.borrow_mut().consume_attack();
    }
}

impl<T: AudioCue> AudioCue for Rc<RefCell<T>> {
    fn play_hit(&mut self) {
        self.borrow_mut().play_hit();
    }

    fn play_wave_clear(&mut self) {
        self.borrow_mut().play_wave_clear();
    }

    fn play_level_up(&mut self) {
        self.borrow_mut().play_level_up();
    }
}

impl<T: Renderer> Renderer for Rc<RefCell<T>> {
    fn clear_frame(&mut self) {
        self.borrow_mut().clear_frame();
    }

    fn draw_character(&mut self, character: &Character) {
        self.borrow_mut().draw_character(character);
    }

    fn draw_health_bar(&mut self, character: &Character) {
        self.borrow_mut().draw_health_bar(character);
    }

    fn draw_ui(&mut self, hud: &Hud) {
        self.borrow_mut().draw_ui(hud);
    }

    fn draw_touch_buttons(&mut self) {
        self.borrow_mut().draw_touch_buttons();
    }
}
