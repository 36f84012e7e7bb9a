//! Property tests for pattern classification and candidate enumeration.
//!
//! Properties tested:
//! - Classification ignores the order cards are submitted in
//! - A classified pattern reclassifies to itself
//! - Every enumerated candidate stays inside the hand and classifies back
//!   to the group it was filed under

use proptest::prelude::*;

use crate::domain::candidates::playable_patterns;
use crate::domain::patterns::classify;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: classification is order-insensitive
    #[test]
    fn prop_classify_ignores_input_order(
        cards in test_gens::unique_cards_up_to(8),
        variant in test_gens::variant(),
    ) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(classify(&cards, variant), classify(&reversed, variant));
    }

    /// Property: a classified pattern reclassifies to itself
    #[test]
    fn prop_classification_is_idempotent(
        cards in test_gens::unique_cards_up_to(5),
        variant in test_gens::variant(),
    ) {
        if let Some(pattern) = classify(&cards, variant) {
            for pair in pattern.cards.windows(2) {
                prop_assert!(pair[0] < pair[1], "pattern cards must be sorted");
            }
            let again = classify(&pattern.cards, variant);
            prop_assert_eq!(again, Some(pattern));
        }
    }

    /// Property: enumerated candidates are honest members of their group
    #[test]
    fn prop_candidates_classify_to_their_group(
        hand in test_gens::hand(),
        variant in test_gens::variant(),
    ) {
        let groups = playable_patterns(&hand, None, variant);
        for (shape, plays) in &groups {
            for play in plays {
                for card in &play.cards {
                    prop_assert!(hand.contains(card), "candidate uses a card outside the hand");
                }
                let reclassified = classify(&play.cards, variant);
                prop_assert_eq!(reclassified.as_ref().map(|p| p.shape), Some(*shape));
                prop_assert_eq!(reclassified.as_ref().map(|p| p.key), Some(play.key));
            }
        }
    }
}
