//! Turn order for a combat round

use crate::combatant::Combatant;
use rand::Rng;

/// Reference to a combatant taking part in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    Protagonist,
    /// Index into the opponent list
    Opponent(usize),
}

/// Order the living participants for one round
///
/// Highest agility acts first. Ties are broken by a fresh random draw per
/// call, so equal-agility combatants are reshuffled every round. Sides are
/// pooled: the protagonist and all opponents share one ordering.
pub fn turn_order<R: Rng + ?Sized>(
    protagonist: &Combatant,
    opponents: &[Combatant],
    rng: &mut R,
) -> Vec<Participant> {
    let living = std::iter::once((Participant::Protagonist, protagonist))
        .chain(
            opponents
                .iter()
                .enumerate()
                .map(|(i, c)| (Participant::Opponent(i), c)),
        )
        .filter(|(_, c)| c.is_alive());

    let mut keyed: Vec<(u32, f64, Participant)> = living
        .map(|(p, c)| (c.agility(), rng.gen::<f64>(), p))
        .collect();

    keyed.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.total_cmp(&a.1)));
    keyed.into_iter().map(|(_, _, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::BaseStats;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn with_agility(name: &str, agility: u32) -> Combatant {
        Combatant::new(
            name,
            BaseStats {
                agility,
                ..BaseStats::default()
            },
        )
    }

    #[test]
    fn test_sorted_by_agility() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let hero = with_agility("hero", 12);
        let opponents = vec![with_agility("slow", 4), with_agility("fast", 20)];
        let order = turn_order(&hero, &opponents, &mut rng);
        assert_eq!(
            order,
            vec![
                Participant::Opponent(1),
                Participant::Protagonist,
                Participant::Opponent(0)
            ]
        );
    }

    #[test]
    fn test_dead_are_excluded() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let hero = with_agility("hero", 12);
        let mut dead = with_agility("dead", 30);
        dead.take_damage(u32::MAX);
        let opponents = vec![dead, with_agility("alive", 1)];
        let order = turn_order(&hero, &opponents, &mut rng);
        assert_eq!(order, vec![Participant::Protagonist, Participant::Opponent(1)]);
    }

    #[test]
    fn test_ties_are_reshuffled() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let hero = with_agility("hero", 10);
        let opponents: Vec<_> = (0..4).map(|i| with_agility(&format!("o{}", i), 10)).collect();
        let orders: HashSet<Vec<Participant>> = (0..50)
            .map(|_| turn_order(&hero, &opponents, &mut rng))
            .collect();
        assert!(orders.len() > 1, "equal agility never reshuffled");
    }

    proptest! {
        #[test]
        fn prop_order_is_permutation_of_living(
            agilities in proptest::collection::vec((0u32..30, any::<bool>()), 0..12),
            hero_agility in 0u32..30,
            seed in any::<u64>(),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let hero = with_agility("hero", hero_agility);
            let opponents: Vec<Combatant> = agilities
                .iter()
                .enumerate()
                .map(|(i, (agi, alive))| {
                    let mut c = with_agility(&format!("o{}", i), *agi);
                    if !alive {
                        c.take_damage(u32::MAX);
                    }
                    c
                })
                .collect();

            let order = turn_order(&hero, &opponents, &mut rng);
            let unique: HashSet<_> = order.iter().copied().collect();
            prop_assert_eq!(unique.len(), order.len());

            let expected: HashSet<_> = std::iter::once(Participant::Protagonist)
                .chain((0..opponents.len()).filter(|i| opponents[*i].is_alive()).map(Participant::Opponent))
                .collect();
            prop_assert_eq!(unique, expected);

            let agility = |p: &Participant| match p {
                Participant::Protagonist => hero.agility(),
                Participant::Opponent(i) => opponents[*i].agility(),
            };
            for pair in order.windows(2) {
                prop_assert!(agility(&pair[0]) >= agility(&pair[1]));
            }
        }
    }
}
