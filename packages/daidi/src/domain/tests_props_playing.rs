//! Property tests for the turn engine, driven from seeded deals.
//!
//! Properties tested:
//! - A weakest-first driver finishes every seeded game without an illegal
//!   move and without losing track of a single card
//! - Settlement of a driven game always sums to zero

use proptest::prelude::*;

use crate::domain::playing::{legal_plays, submit_pass, submit_play};
use crate::domain::rules::DECK_SIZE;
use crate::domain::scoring::settle;
use crate::domain::state::{GameState, Phase, StrategyTier};
use crate::domain::test_state_helpers::profiles;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: driven games stay coherent and terminate
    #[test]
    fn prop_driven_games_conserve_cards_and_terminate(
        seed in any::<u64>(),
        variant in test_gens::variant(),
    ) {
        let mut state = GameState::new(variant, profiles(StrategyTier::Smart1), seed);
        let dealt: usize = state.hands.iter().map(Vec::len).sum();
        prop_assert_eq!(dealt, DECK_SIZE);

        let mut played = 0usize;
        let mut guard = 0;
        while let Some(seat) = state.turn {
            guard += 1;
            prop_assert!(guard < 1_000, "driver failed to terminate");

            let groups = legal_plays(&state, seat).unwrap();
            let weakest = groups
                .values()
                .flatten()
                .min_by_key(|p| (p.cards.len(), p.key))
                .cloned();
            match weakest {
                Some(play) => {
                    let outcome = submit_play(&mut state, seat, &play.cards).unwrap();
                    played += play.cards.len();
                    prop_assert_eq!(
                        outcome.cards_left,
                        state.hands[seat as usize].len(),
                        "outcome must report the mutated hand",
                    );
                }
                None => {
                    submit_pass(&mut state, seat).unwrap();
                }
            }

            let in_hands: usize = state.hands.iter().map(Vec::len).sum();
            prop_assert_eq!(in_hands + played, DECK_SIZE, "cards leaked or duplicated");
        }

        prop_assert_eq!(state.phase, Phase::GameOver);
        let winner = state.winner;
        prop_assert!(winner.is_some(), "a finished game names its winner");
        prop_assert!(state.hands[winner.unwrap_or(0) as usize].is_empty());
    }

    /// Property: settlement of a driven game sums to zero
    #[test]
    fn prop_driven_games_settle_to_zero(
        seed in any::<u64>(),
        variant in test_gens::variant(),
    ) {
        let mut state = GameState::new(variant, profiles(StrategyTier::Smart1), seed);
        let mut guard = 0;
        while let Some(seat) = state.turn {
            guard += 1;
            prop_assert!(guard < 1_000, "driver failed to terminate");

            let groups = legal_plays(&state, seat).unwrap();
            let weakest = groups
                .values()
                .flatten()
                .min_by_key(|p| (p.cards.len(), p.key))
                .cloned();
            match weakest {
                Some(play) => {
                    submit_play(&mut state, seat, &play.cards).unwrap();
                }
                None => {
                    submit_pass(&mut state, seat).unwrap();
                }
            }
        }

        let deltas = settle(&mut state).unwrap();
        prop_assert_eq!(deltas.iter().sum::<i64>(), 0, "settlement must be zero-sum");
        prop_assert_eq!(state.scores_total.iter().sum::<i64>(), 0);
    }
}
