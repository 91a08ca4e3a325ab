//! Display-free collaborators
//!
//! Used by the native binary and by driver tests.

use super::{AudioCue, Hud, Renderer};
use crate::sim::Character;

/// One renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Character { x: f32, alive: bool, frame: u8 },
    HealthBar { x: f32, fraction: f32 },
    Ui(Hud),
    TouchButtons,
}

/// Records the calls of the most recent frame
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub calls: Vec<DrawCall>,
    pub last_hud: Option<Hud>,
}

impl Renderer for HeadlessRenderer {
    fn clear_frame(&mut self) {
        self.frames += 1;
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
    }

    fn draw_character(&mut self, character: &Character) {
        self.calls.push(DrawCall::Character {
            x: character.x(),
            alive: character.alive(),
            frame: character.frame(),
        });
    }

    fn draw_health_bar(&mut self, character: &Character) {
        self.calls.push(DrawCall::HealthBar {
            x: character.x(),
            fraction: character.health_fraction(),
        });
    }

    fn draw_ui(&mut self, hud: &Hud) {
        self.last_hud = Some(*hud);
        self.calls.push(DrawCall::Ui(*hud));
    }

    fn draw_touch_buttons(&mut self) {
        self.calls.push(DrawCall::TouchButtons);
    }
}

/// Counts cues instead of playing them
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingAudio {
    pub hits: u32,
    pub wave_clears: u32,
    pub level_ups: u32,
}

impl AudioCue for CountingAudio {
    fn play_hit(&mut self) {
        self.hits += 1;
    }

    fn play_wave_clear(&mut self) {
        self.wave_clears += 1;
    }

    fn play_level_up(&mut self) {
        self.level_ups += 1;
    }
}
