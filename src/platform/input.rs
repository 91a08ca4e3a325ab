//! Keyboard and touch mapping
//!
//! Event handlers feed raw key and touch events in; the tick driver reads a
//! `TickInput` snapshot out. Movement is level-held, attack is a latch that
//! only `consume_attack` clears.

use super::InputSource;
use crate::consts::*;
use crate::sim::TickInput;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    key_left: bool,
    key_right: bool,
    touch_left: bool,
    touch_right: bool,
    attack_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a keydown. Auto-repeat never re-arms the attack.
    pub fn key_down(&mut self, key: &str, repeat: bool) {
        match key {
            "ArrowLeft" => self.key_left = true,
            "ArrowRight" => self.key_right = true,
            " " if !repeat => self.attack_requested = true,
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: &str) {
        match key {
            "ArrowLeft" => self.key_left = false,
            "ArrowRight" => self.key_right = false,
            _ => {}
        }
    }

    /// Handle one started touch point by its client x
    pub fn touch_start(&mut self, client_x: f64) {
        if client_x < TOUCH_LEFT_MAX_X {
            self.touch_left = true;
        } else if client_x < TOUCH_RIGHT_MAX_X {
            self.touch_right = true;
        } else if client_x > TOUCH_ATTACK_MIN_X {
            self.attack_requested = true;
        }
    }

    /// Any touch lifting releases both movement zones. A pending attack
    /// stays latched until a tick consumes it.
    pub fn touch_end(&mut self) {
        self.touch_left = false;
        self.touch_right = false;
    }

    /// Release held movement (focus loss)
    pub fn clear(&mut self) {
        self.key_left = false;
        self.key_right = false;
        self.touch_left = false;
        self.touch_right = false;
    }
}

impl InputSource for InputState {
    fn snapshot(&mut self) -> TickInput {
        TickInput {
            left: self.key_left || self.touch_left,
            right: self.key_right || self.touch_right,
            attack: self.attack_requested,
        }
    }

    fn consume_attack(&mut self) {
        self.attack_requested = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_level_held() {
        let mut input = InputState::new();
        input.key_down("ArrowRight", false);
        assert!(input.snapshot().right);
        assert!(input.snapshot().right);
        input.key_up("ArrowRight");
        assert!(!input.snapshot().right);
    }

    #[test]
    fn test_attack_latches_until_consumed() {
        let mut input = InputState::new();
        input.key_down(" ", false);
        assert!(input.snapshot().attack);
        assert!(input.snapshot().attack);
        input.consume_attack();
        assert!(!input.snapshot().attack);

        // Holding space only repeats, never re-arms
        input.key_down(" ", true);
        assert!(!input.snapshot().attack);
    }

    #[test]
    fn test_touch_zones() {
        let mut input = InputState::new();
        input.touch_start(40.0);
        assert_eq!(
            input.snapshot(),
            TickInput {
                left: true,
                right: false,
                attack: false
            }
        );
        input.touch_start(120.0);
        input.touch_start(700.0);
        assert_eq!(
            input.snapshot(),
            TickInput {
                left: true,
                right: true,
                attack: true
            }
        );
        input.touch_end();
        assert_eq!(
            input.snapshot(),
            TickInput {
                left: false,
                right: false,
                attack: true
            }
        );
        input.consume_attack();
        assert_eq!(input.snapshot(), TickInput::default());

        // Dead zone between the movement buttons and the attack button
        input.touch_start(400.0);
        assert_eq!(input.snapshot(), TickInput::default());
    }

    #[test]
    fn test_keyboard_and_touch_combine() {
        let mut input = InputState::new();
        input.key_down("ArrowLeft", false);
        input.touch_start(100.0);
        let snap = input.snapshot();
        assert!(snap.left && snap.right);
        input.clear();
        assert_eq!(input.snapshot(), TickInput::default());
    }

    #[test]
    fn test_blur_keeps_pending_attack() {
        let mut input = InputState::new();
        input.key_down("ArrowRight", false);
        input.key_down(" ", false);
        input.clear();
        let snap = input.snapshot();
        assert!(!snap.right);
        assert!(snap.attack);
    }
}
