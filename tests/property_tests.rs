//! Property tests over randomly seeded scenarios and decks.

use std::sync::Arc;

use proptest::prelude::*;

use skirmish::cards::{ModifierCard, ModifierDeck};
use skirmish::content::standard;
use skirmish::core::{CharacterId, GameRng, MonsterTypeId, ScenarioError};
use skirmish::scenario::{Scenario, Turn, TurnActor, TurnScheduler};

fn modifier() -> impl Strategy<Value = ModifierCard> {
    prop_oneof![
        Just(ModifierCard::Miss),
        Just(ModifierCard::Double),
        (-3i32..=3).prop_map(ModifierCard::Delta),
    ]
}

fn turn() -> impl Strategy<Value = Turn> {
    prop_oneof![
        (0u8..100, 0u8..4, 0u8..100).prop_map(|(initiative, id, tie_break)| Turn {
            initiative,
            actor: TurnActor::Character {
                character: CharacterId::new(id),
                tie_break,
            },
        }),
        (0u8..100, 0usize..4).prop_map(|(initiative, order)| Turn {
            initiative,
            actor: TurnActor::Monsters {
                monster_type: MonsterTypeId::new(order as u16),
                order,
                action: 0,
            },
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Whole-scenario invariants checked after every round.
    #[test]
    fn prop_scenario_invariants(seed in any::<u64>()) {
        let registry = Arc::new(standard::registry().unwrap());
        let config = standard::config(standard::default_roster());
        let mut rng = GameRng::new(seed);
        let mut scenario = Scenario::setup(registry, &config, &mut rng).unwrap();

        let mut previous_round = scenario.round();
        let mut previous_lost = vec![0; scenario.characters().len()];
        let mut finished = false;

        for _ in 0..500 {
            let report = scenario.advance_round(&mut rng).unwrap();

            prop_assert_eq!(report.round, previous_round + 1);
            previous_round = report.round;

            for (i, character) in scenario.characters().iter().enumerate() {
                prop_assert_eq!(character.pool.tracked_cards(), character.pool.total_cards());
                prop_assert!(character.hp <= character.max_hp);
                if character.hp == 0 {
                    prop_assert!(character.is_exhausted());
                }
                // Lost cards never come back.
                let lost = character.pool.cards_in_zone(skirmish::zones::CardZone::Lost).len();
                prop_assert!(lost >= previous_lost[i]);
                previous_lost[i] = lost;
            }

            for instance in scenario.monsters().instances() {
                prop_assert!(instance.hp > 0);
                prop_assert!(instance.hp <= instance.max_hp);
            }
            for group in scenario.monsters().groups() {
                prop_assert!(!group.instances().is_empty());
            }

            if report.outcome.is_some() {
                finished = true;
                break;
            }
        }

        prop_assert!(finished);
        let outcome = scenario.outcome().unwrap();
        prop_assert_eq!(
            scenario.advance_round(&mut rng),
            Err(ScenarioError::AlreadyOver(outcome))
        );
    }

    /// Any non-empty deck can be drawn from indefinitely, and a miss or
    /// double always leaves a full deck behind.
    #[test]
    fn prop_modifier_deck_never_runs_dry(
        cards in prop::collection::vec(modifier(), 1..25),
        draws in 1usize..200,
        seed in any::<u64>(),
    ) {
        let mut deck = ModifierDeck::new(cards.clone());
        let mut rng = GameRng::new(seed);
        deck.shuffle(&mut rng);

        for _ in 0..draws {
            let card = deck.draw(&mut rng);
            prop_assert!(cards.contains(&card));
            prop_assert!(deck.remaining() <= deck.len());
            if card.forces_reshuffle() {
                prop_assert_eq!(deck.remaining(), deck.len());
            }
        }
    }

    /// Scheduling yields non-decreasing initiative and characters before
    /// monsters on ties.
    #[test]
    fn prop_schedule_is_sorted(mut turns in prop::collection::vec(turn(), 0..12)) {
        TurnScheduler::order(&mut turns);

        for pair in turns.windows(2) {
            prop_assert!(TurnScheduler::compare(&pair[0], &pair[1]).is_le());
            if pair[0].initiative == pair[1].initiative {
                prop_assert!(pair[0].is_character() || !pair[1].is_character());
            }
        }
    }
}
