//! Tick driver
//!
//! Owns the `GameState` and its collaborators. The host calls `step()` once
//! per display frame (requestAnimationFrame in the browser, a plain loop in
//! headless runs) until the `LoopHandle` is stopped.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{GameError, GameResult};
use crate::platform::{AudioCue, Hud, InputSource, Renderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Shared run flag for a game loop
#[derive(Debug, Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }
}

impl LoopHandle {
    /// Stop the loop; the next `step` returns false without ticking
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Collects collaborators and validates them before the first tick
#[derive(Default)]
pub struct GameLoopBuilder {
    renderer: Option<Box<dyn Renderer>>,
    input: Option<Box<dyn InputSource>>,
    audio: Option<Box<dyn AudioCue>>,
    settings: Settings,
    state: Option<GameState>,
}

impl GameLoopBuilder {
    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn input(mut self, input: impl InputSource + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn audio(mut self, audio: impl AudioCue + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Start from an existing state instead of a fresh game
    pub fn state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn build(self) -> GameResult<GameLoop> {
        let renderer = self
            .renderer
            .ok_or(GameError::MissingCollaborator("renderer"))?;
        let input = self.input.ok_or(GameError::MissingCollaborator("input"))?;
        let audio = self.audio.ok_or(GameError::MissingCollaborator("audio"))?;
        Ok(GameLoop {
            state: self.state.unwrap_or_default(),
            renderer,
            input,
            audio,
            settings: self.settings,
            handle: LoopHandle::default(),
        })
    }
}

/// A running game: state plus collaborators
pub struct GameLoop {
    state: GameState,
    renderer: Box<dyn Renderer>,
    input: Box<dyn InputSource>,
    audio: Box<dyn AudioCue>,
    settings: Settings,
    handle: LoopHandle,
}

impl GameLoop {
    pub fn builder() -> GameLoopBuilder {
        GameLoopBuilder::default()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Reset the player's sprite and respawn the roster, as the start button does
    pub fn character_select(&mut self) {
        self.state.character_select();
        log::info!(
            "Game started at level {} wave {}",
            self.state.progression.level,
            self.state.progression.wave
        );
    }

    /// Run one tick and draw it. Returns false once the loop is stopped.
    pub fn step(&mut self) -> bool {
        if !self.handle.is_running() {
            return false;
        }

        let input = self.input.snapshot();
        tick(&mut self.state, &input);
        self.input.consume_attack();

        for event in self.state.drain_events() {
            match event {
                GameEvent::Hit { .. } => self.audio.play_hit(),
                GameEvent::WaveCleared { .. } => self.audio.play_wave_clear(),
                GameEvent::LevelUp { .. } => self.audio.play_level_up(),
            }
        }

        self.render();
        true
    }

    /// Draw the current state
    pub fn render(&mut self) {
        let r = &mut self.renderer;
        r.clear_frame();
        for character in std::iter::once(&self.state.player).chain(self.state.enemies()) {
            r.draw_character(character);
            if character.alive() {
                r.draw_health_bar(character);
            }
        }
        r.draw_ui(&Hud::from_state(&self.state));
        if self.settings.show_touch_buttons {
            r.draw_touch_buttons();
        }
    }
}
