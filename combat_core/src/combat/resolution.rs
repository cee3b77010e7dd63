//! Attack resolution - hit chance, damage roll and applying a hit

use super::result::AttackResult;
use crate::combatant::Combatant;
use crate::config::{constants, CombatConstants};
use rand::Rng;

/// Chance for `attacker` to hit `defender`, using the global constants
///
/// `0.5 + 0.03 * (attacker DEX - defender DEX)`, clamped to `[0.05, 0.95]`.
pub fn hit_chance(attacker: &Combatant, defender: &Combatant) -> f64 {
    hit_chance_with(constants(), attacker, defender)
}

/// Hit chance with explicit constants
///
/// Constants are not validated here. Inverted bounds resolve to `max_chance`.
pub fn hit_chance_with(
    constants: &CombatConstants,
    attacker: &Combatant,
    defender: &Combatant,
) -> f64 {
    let hit = &constants.hit;
    let dex_difference = attacker.dexterity() as f64 - defender.dexterity() as f64;
    let chance = hit.base_chance + dex_difference * hit.per_dexterity;
    chance.max(hit.min_chance).min(hit.max_chance)
}

/// Roll raw damage for one attack: strength scaled by a fresh variance draw
///
/// Truncates toward zero and never returns less than 1.
pub fn roll_damage<R: Rng + ?Sized>(attacker: &Combatant, rng: &mut R) -> u32 {
    roll_damage_with(constants(), attacker, rng)
}

/// Damage roll with explicit constants
///
/// An empty or inverted variance range uses `variance_max` without a draw.
pub fn roll_damage_with<R: Rng + ?Sized>(
    constants: &CombatConstants,
    attacker: &Combatant,
    rng: &mut R,
) -> u32 {
    let damage = &constants.damage;
    let variance = if damage.variance_min < damage.variance_max {
        rng.gen_range(damage.variance_min..=damage.variance_max)
    } else {
        damage.variance_max
    };
    let raw = (attacker.strength() as f64 * variance) as u32;
    raw.max(1)
}

/// Resolve one attack, mutating the defender on a hit
///
/// A downed attacker does nothing. Otherwise a roll in `[0, 1)` at or under
/// the hit chance lands, and the defender loses the rolled damage (capped at
/// its remaining HP).
pub fn attack<R: Rng + ?Sized>(
    attacker: &Combatant,
    defender: &mut Combatant,
    rng: &mut R,
) -> AttackResult {
    if !attacker.is_alive() {
        return AttackResult::downed(attacker.name(), defender.name());
    }

    let chance = hit_chance(attacker, defender);
    let roll: f64 = rng.gen();
    if roll > chance {
        return AttackResult::miss(attacker.name(), defender.name(), chance);
    }

    let damage = roll_damage(attacker, rng);
    let dealt = defender.take_damage(damage);
    AttackResult {
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        hit: true,
        damage_dealt: dealt,
        defender_defeated: !defender.is_alive(),
        hit_chance: Some(chance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::BaseStats;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn with_dex(name: &str, dexterity: u32) -> Combatant {
        Combatant::new(
            name,
            BaseStats {
                dexterity,
                ..BaseStats::default()
            },
        )
    }

    fn with_str(name: &str, strength: u32) -> Combatant {
        Combatant::new(
            name,
            BaseStats {
                strength,
                ..BaseStats::default()
            },
        )
    }

    #[test]
    fn test_hit_chance_dex_advantage() {
        let a = with_dex("a", 15);
        let d = with_dex("d", 10);
        assert!((hit_chance(&a, &d) - 0.65).abs() < 1e-9);
        assert!((hit_chance(&d, &a) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_hit_chance_clamped() {
        let a = with_dex("a", 40);
        let d = with_dex("d", 1);
        assert!((hit_chance(&a, &d) - 0.95).abs() < 1e-9);
        assert!((hit_chance(&d, &a) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_hit_chance_custom_constants() {
        let mut constants = CombatConstants::default();
        constants.hit.per_dexterity = 0.1;
        let a = with_dex("a", 12);
        let d = with_dex("d", 10);
        assert!((hit_chance_with(&constants, &a, &d) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_damage_within_variance() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let a = with_str("a", 10);
        for _ in 0..200 {
            let dmg = roll_damage(&a, &mut rng);
            assert!((8..=12).contains(&dmg), "damage {} out of range", dmg);
        }
    }

    #[test]
    fn test_damage_floor_of_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let weakling = with_str("a", 0);
        assert_eq!(roll_damage(&weakling, &mut rng), 1);
    }

    #[test]
    fn test_downed_attacker_is_noop() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut a = with_str("a", 10);
        a.take_damage(u32::MAX);
        let mut d = with_str("d", 10);
        let result = attack(&a, &mut d, &mut rng);
        assert!(!result.hit);
        assert_eq!(result.damage_dealt, 0);
        assert_eq!(d.current_hp(), d.max_hp());
        assert_eq!(result.to_string(), "a is defeated and cannot attack!");
    }

    #[test]
    fn test_attack_outcomes_are_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let a = with_str("a", 12);
        let mut hits = 0;
        let mut misses = 0;
        for _ in 0..100 {
            let mut d = with_str("d", 10);
            let before = d.current_hp();
            let result = attack(&a, &mut d, &mut rng);
            assert_eq!(before - d.current_hp(), result.damage_dealt);
            if result.hit {
                hits += 1;
                assert!(result.damage_dealt >= 1);
                assert!(result.to_string().starts_with("a hits d for"));
            } else {
                misses += 1;
                assert_eq!(result.to_string(), "a misses d!");
            }
        }
        assert!(hits > 0 && misses > 0);
    }

    #[test]
    fn test_killing_blow_reports_remaining_hp() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let a = Combatant::new(
            "ogre",
            BaseStats {
                strength: 50,
                dexterity: 60,
                ..BaseStats::default()
            },
        );
        let mut d = with_dex("rat", 1).with_current(5, 0);
        let result = loop {
            let r = attack(&a, &mut d, &mut rng);
            if r.hit {
                break r;
            }
        };
        assert_eq!(result.damage_dealt, 5);
        assert!(result.defender_defeated);
        assert_eq!(result.to_string(), "ogre hits rat for 5 damage! rat is defeated!");
    }

    #[test]
    fn test_inverted_constants_do_not_panic() {
        let mut constants = CombatConstants::default();
        constants.hit.min_chance = 0.9;
        constants.hit.max_chance = 0.2;
        constants.damage.variance_min = 1.5;
        constants.damage.variance_max = 0.5;
        assert!(constants.validate().is_err());

        let a = with_str("a", 10);
        let d = with_str("d", 10);
        assert!((hit_chance_with(&constants, &a, &d) - 0.2).abs() < 1e-9);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(roll_damage_with(&constants, &a, &mut rng), 5);
    }

    proptest! {
        #[test]
        fn prop_hit_chance_bounded(a_dex in 0u32..500, d_dex in 0u32..500) {
            let chance = hit_chance(&with_dex("a", a_dex), &with_dex("d", d_dex));
            prop_assert!((0.05..=0.95).contains(&chance));
        }

        #[test]
        fn prop_hits_deal_at_least_one(strength in 0u32..100, seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let a = with_str("a", strength);
            let mut d = Combatant::new("d", BaseStats { constitution: 200, ..BaseStats::default() });
            let result = attack(&a, &mut d, &mut rng);
            if result.hit {
                prop_assert!(result.damage_dealt >= 1);
            } else {
                prop_assert_eq!(result.damage_dealt, 0);
            }
        }
    }
}
