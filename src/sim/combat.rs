//! Melee attack resolution

use serde::{Deserialize, Serialize};

use super::character::Character;
use crate::consts::MELEE_RANGE;

/// Outcome of an attack that landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub damage: i32,
    /// The hit dropped the target to zero or below
    pub killed: bool,
}

/// True when both combatants are alive and horizontally within melee range
pub fn in_reach(attacker: &Character, target: &Character) -> bool {
    attacker.alive() && target.alive() && (attacker.x() - target.x()).abs() < MELEE_RANGE
}

/// Resolve one attack. Returns `None` (and changes nothing) if the attack
/// cannot land; the caller is responsible for the hit cue on `Some`.
pub fn attack(attacker: &Character, target: &mut Character) -> Option<Hit> {
    if !in_reach(attacker, target) {
        return None;
    }
    let damage = attacker.damage_per_hit();
    let killed = target.take_damage(damage);
    Some(Hit { damage, killed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::character::Role;
    use proptest::prelude::*;

    #[test]
    fn test_out_of_range_is_noop() {
        let player = Character::new(100.0, 300.0, Role::Regular);
        let mut enemy = Character::new(500.0, 300.0, Role::Regular);
        assert_eq!(attack(&player, &mut enemy), None);
        assert_eq!(enemy.health(), 100);
    }

    #[test]
    fn test_in_range_regular_hit() {
        let player = Character::new(450.0, 300.0, Role::Regular);
        let mut enemy = Character::new(500.0, 300.0, Role::Regular);
        let hit = attack(&player, &mut enemy);
        assert_eq!(
            hit,
            Some(Hit {
                damage: 10,
                killed: false
            })
        );
        assert_eq!(enemy.health(), 90);
    }

    #[test]
    fn test_range_boundary_is_exclusive() {
        let player = Character::new(440.0, 300.0, Role::Regular);
        let mut enemy = Character::new(500.0, 300.0, Role::Regular);
        assert_eq!(attack(&player, &mut enemy), None);
        enemy.pos.x = 499.0;
        assert!(attack(&player, &mut enemy).is_some());
    }

    #[test]
    fn test_boss_deals_double() {
        let boss = Character::new(0.0, 0.0, Role::Boss);
        let mut target = Character::new(10.0, 0.0, Role::Regular);
        attack(&boss, &mut target);
        assert_eq!(target.health(), 80);
    }

    #[test]
    fn test_dead_combatants_cannot_fight() {
        let mut attacker = Character::new(0.0, 0.0, Role::Regular);
        let mut target = Character::new(10.0, 0.0, Role::Regular);
        attacker.take_damage(100);
        assert_eq!(attack(&attacker, &mut target), None);
        assert_eq!(target.health(), 100);

        let attacker = Character::new(0.0, 0.0, Role::Regular);
        target.take_damage(100);
        assert_eq!(attack(&attacker, &mut target), None);
        assert_eq!(target.health(), 0);
    }

    #[test]
    fn test_boss_attrition() {
        let player = Character::new(0.0, 0.0, Role::Regular);
        let mut boss = Character::new(30.0, 0.0, Role::Boss);
        for _ in 0..15 {
            attack(&player, &mut boss);
        }
        assert_eq!(boss.health(), 150);
        assert!(boss.alive());

        for _ in 15..29 {
            attack(&player, &mut boss);
        }
        assert!(boss.alive());
        let last = attack(&player, &mut boss);
        assert_eq!(
            last,
            Some(Hit {
                damage: 10,
                killed: true
            })
        );
        assert_eq!(boss.health(), 0);
        assert!(!boss.alive());
    }

    proptest! {
        #[test]
        fn prop_out_of_range_never_hits(ax in -1000.0f32..1000.0, gap in 60.0f32..2000.0, left in any::<bool>()) {
            let attacker = Character::new(ax, 300.0, Role::Boss);
            let tx = if left { ax - gap } else { ax + gap };
            let mut target = Character::new(tx, 300.0, Role::Regular);
            prop_assume!((attacker.x() - target.x()).abs() >= MELEE_RANGE);
            prop_assert_eq!(attack(&attacker, &mut target), None);
            prop_assert_eq!(target.health(), 100);
            prop_assert!(target.alive());
        }
    }
}
