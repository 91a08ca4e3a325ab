//! Simulation tick
//!
//! One call advances the game by one display frame: movement, at most one
//! player attack, animation, then wave progression.

use serde::{Deserialize, Serialize};

use super::combat;
use super::progression::Advance;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// One-shot; the host must clear it once this tick has consumed it
    pub attack: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Both directions may apply in the same tick and cancel out
    if input.right {
        state.player.pos.x += MOVE_STEP;
    }
    if input.left {
        state.player.pos.x -= MOVE_STEP;
    }

    // Only the first living enemy is considered, whether or not it is in reach
    if input.attack {
        if let Some((target, enemy)) = state.progression.first_alive_mut() {
            if let Some(hit) = combat::attack(&state.player, enemy) {
                log::debug!(
                    "Player hit enemy {} for {} (hp {})",
                    target,
                    hit.damage,
                    enemy.health()
                );
                state.events.push(GameEvent::Hit {
                    target,
                    damage: hit.damage,
                    killed: hit.killed,
                });
            }
        }
    }

    state.player.advance_animation();
    for enemy in &mut state.progression.enemies {
        enemy.advance_animation();
    }

    if let Some(advance) = state.progression.check_clear() {
        let score = state.progression.score;
        let event = match advance {
            Advance::NextWave { level, wave } => {
                log::info!("Wave cleared! Level {} wave {} (score {})", level, wave, score);
                GameEvent::WaveCleared { level, wave, score }
            }
            Advance::NextLevel { level } => {
                log::info!("Level up! Level {} (score {})", level, score);
                GameEvent::LevelUp { level, score }
            }
        };
        state.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTACK: TickInput = TickInput {
        left: false,
        right: false,
        attack: true,
    };

    #[test]
    fn test_movement() {
        let mut state = GameState::new();
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right);
        assert_eq!(state.player.pos.x, 105.0);

        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &left);
        tick(&mut state, &left);
        assert_eq!(state.player.pos.x, 95.0);

        let both = TickInput {
            left: true,
            right: true,
            attack: false,
        };
        tick(&mut state, &both);
        assert_eq!(state.player.pos.x, 95.0);
    }

    #[test]
    fn test_attack_out_of_range_then_in_range() {
        let mut state = GameState::new();
        tick(&mut state, &ATTACK);
        assert_eq!(state.enemies()[0].health(), 100);
        assert!(state.drain_events().is_empty());

        state.player.pos.x = 450.0;
        tick(&mut state, &ATTACK);
        assert_eq!(state.enemies()[0].health(), 90);
        assert_eq!(state.enemies()[1].health(), 100);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Hit {
                target: 0,
                damage: 10,
                killed: false
            }]
        );
    }

    #[test]
    fn test_attack_stops_at_first_alive_even_if_out_of_range() {
        let mut state = GameState::new();
        // Second enemy is in reach, first is not
        state.player.pos.x = 600.0;
        state.progression.enemies[0].pos.x = 0.0;
        tick(&mut state, &ATTACK);
        assert_eq!(state.enemies()[0].health(), 100);
        assert_eq!(state.enemies()[1].health(), 100);
    }

    #[test]
    fn test_attack_skips_dead_enemies() {
        let mut state = GameState::new();
        state.progression.enemies[0].take_damage(1000);
        state.player.pos.x = 570.0;
        tick(&mut state, &ATTACK);
        assert_eq!(state.enemies()[1].health(), 90);
    }

    #[test]
    fn test_no_attack_without_intent() {
        let mut state = GameState::new();
        state.player.pos.x = 500.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.enemies()[0].health(), 100);
    }

    #[test]
    fn test_clearing_first_wave() {
        let mut state = GameState::new();
        state.player.pos.x = 540.0;
        // Both enemies within 60 px of the player
        let mut ticks = 0;
        while state.progression.wave == 1 {
            tick(&mut state, &ATTACK);
            ticks += 1;
            assert!(ticks <= 20);
        }
        assert_eq!(ticks, 20);
        assert_eq!(state.progression.wave, 2);
        assert_eq!(state.enemies().len(), 3);
        assert_eq!(state.progression.score, 100);
        let events = state.drain_events();
        assert_eq!(
            events.last(),
            Some(&GameEvent::WaveCleared {
                level: 1,
                wave: 2,
                score: 100
            })
        );
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::Hit { killed: true, .. }))
                .count(),
            2
        );
    }

    #[test]
    fn test_level_up_after_max_waves() {
        let mut state = GameState::new();
        state.progression.wave = 3;
        state.progression.spawn_wave();
        assert_eq!(state.enemies().len(), 4);
        for e in &mut state.progression.enemies {
            e.take_damage(1000);
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.progression.level, 2);
        assert_eq!(state.progression.wave, 1);
        assert_eq!(state.enemies().len(), 2);
        assert_eq!(state.progression.score, 100);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::LevelUp {
                level: 2,
                score: 100
            }]
        );
    }

    #[test]
    fn test_score_only_on_clear() {
        let mut state = GameState::new();
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.progression.score, 0);
        assert_eq!(state.time_ticks, 100);
    }

    #[test]
    fn test_animation_advances_every_character() {
        let mut state = GameState::new();
        state.progression.enemies[1].take_damage(1000);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.player.frame(), 1);
        assert!(state.enemies().iter().all(|e| e.frame() == 1));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new();
        let mut state2 = GameState::new();

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            ATTACK,
            TickInput {
                left: true,
                attack: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.progression, state2.progression);
    }
}
