//! Deterministic card dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, RANKS, SUITS};
use super::rules::{DECK_SIZE, PLAYERS};
use super::state::Seat;

/// The 52-card deck in weight order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in RANKS {
        for suit in SUITS {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Shuffle and deal four sorted thirteen-card hands.
///
/// The same seed always produces the same deal; the ChaCha stream is stable
/// across platforms and releases, so recorded seeds stay replayable.
pub fn deal(seed: u64) -> [Vec<Card>; PLAYERS] {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % PLAYERS].push(card);
    }
    for hand in &mut hands {
        hand.sort_unstable();
    }
    hands
}

/// Seat holding `lead`, if any hand does.
pub fn lead_holder(hands: &[Vec<Card>; PLAYERS], lead: Card) -> Option<Seat> {
    hands
        .iter()
        .position(|hand| hand.contains(&lead))
        .map(|i| i as Seat)
}

/// Mix a base seed and a game number into an independent deal seed.
///
/// SplitMix64 finalizer, so consecutive game numbers land far apart in the
/// seed space instead of producing correlated shuffles.
pub fn derive_deal_seed(base: u64, game_no: u64) -> u64 {
    let mut z = base.wrapping_add(game_no.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z ^= z >> 30;
    z = z.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z ^= z >> 27;
    z = z.wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
