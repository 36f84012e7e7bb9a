//! Property tests for shuffling and dealing.
//!
//! Properties tested:
//! - Every seed partitions the full deck into four sorted 13-card hands
//! - Dealing is a pure function of the seed
//! - Per-game seed derivation is stable and separates consecutive games

use proptest::prelude::*;

use crate::domain::dealing::{deal, derive_deal_seed, full_deck};
use crate::domain::rules::HAND_SIZE;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a deal is a partition of the deck into sorted hands
    #[test]
    fn prop_deal_partitions_the_deck(seed in any::<u64>()) {
        let hands = deal(seed);

        let mut all: Vec<_> = hands.iter().flatten().copied().collect();
        all.sort_unstable();
        prop_assert_eq!(all, full_deck(), "hands must cover the deck exactly once");

        for hand in &hands {
            prop_assert_eq!(hand.len(), HAND_SIZE);
            for pair in hand.windows(2) {
                prop_assert!(pair[0] < pair[1], "hands must be sorted strictly ascending");
            }
        }
    }

    /// Property: equal seeds deal equal hands
    #[test]
    fn prop_deal_is_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(deal(seed), deal(seed));
    }

    /// Property: derived seeds are stable per game and differ between games
    #[test]
    fn prop_derived_seeds_are_stable(base in any::<u64>(), game_no in 0u64..10_000) {
        let derived = derive_deal_seed(base, game_no);
        prop_assert_eq!(derived, derive_deal_seed(base, game_no));
        prop_assert_ne!(derived, derive_deal_seed(base, game_no + 1));
    }
}
