//! Pattern classification: shapes, strength keys, and the classifier.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Rank};
use super::rules::{RuleVariant, StraightScheme, HAND_SIZE};

/// Shape categories. Declaration order is the traditional pattern weight
/// order (single lowest, straight flush highest), so the derived `Ord` can
/// be used to sort candidate groups for display.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    Single,
    Pair,
    Triple,
    Straight,
    Flush,
    FullHouse,
    Bomb,
    StraightFlush,
}

/// All shapes in ascending weight order.
pub const SHAPES: [Shape; 8] = [
    Shape::Single,
    Shape::Pair,
    Shape::Triple,
    Shape::Straight,
    Shape::Flush,
    Shape::FullHouse,
    Shape::Bomb,
    Shape::StraightFlush,
];

/// A classified play: shape tag, numeric strength key, and the card set
/// (kept sorted ascending).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    pub shape: Shape,
    /// Weight of the play's ranking card; decides same-shape comparisons.
    pub key: u8,
    pub cards: Vec<Card>,
}

impl Pattern {
    /// Build a pattern from cards already sorted ascending and known to form
    /// `shape`. The key is the weight of the strongest member, except for a
    /// full house where the triple decides.
    pub(crate) fn from_sorted(shape: Shape, cards: Vec<Card>) -> Self {
        let key = match shape {
            Shape::FullHouse => triple_key(&cards),
            _ => cards.last().map_or(0, |c| c.weight()),
        };
        Pattern { shape, key, cards }
    }
}

/// Classify a card set into its shape under the given variant.
///
/// Pure function of its inputs. Returns None when the set matches no shape,
/// including duplicate cards (which the turn engine never submits).
pub fn classify(cards: &[Card], variant: RuleVariant) -> Option<Pattern> {
    if cards.is_empty() || cards.len() > HAND_SIZE {
        return None;
    }
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }
    match sorted.len() {
        1 => Some(Pattern::from_sorted(Shape::Single, sorted)),
        2 => of_a_kind(sorted, Shape::Pair),
        3 => of_a_kind(sorted, Shape::Triple),
        4 => of_a_kind(sorted, Shape::Bomb),
        5 => classify_five(sorted, variant),
        _ => classify_long(sorted, variant),
    }
}

fn of_a_kind(sorted: Vec<Card>, shape: Shape) -> Option<Pattern> {
    if sorted.windows(2).all(|w| w[0].rank == w[1].rank) {
        Some(Pattern::from_sorted(shape, sorted))
    } else {
        None
    }
}

fn classify_five(sorted: Vec<Card>, variant: RuleVariant) -> Option<Pattern> {
    let flush = sorted.windows(2).all(|w| w[0].suit == w[1].suit);
    let straight = is_straight_set(&sorted, variant);
    match (straight, flush) {
        (true, true) => Some(Pattern::from_sorted(Shape::StraightFlush, sorted)),
        (true, false) => Some(Pattern::from_sorted(Shape::Straight, sorted)),
        (false, true) => Some(Pattern::from_sorted(Shape::Flush, sorted)),
        (false, false) => full_house(sorted),
    }
}

fn classify_long(sorted: Vec<Card>, variant: RuleVariant) -> Option<Pattern> {
    if is_straight_set(&sorted, variant) {
        Some(Pattern::from_sorted(Shape::Straight, sorted))
    } else {
        None
    }
}

fn full_house(sorted: Vec<Card>) -> Option<Pattern> {
    // Sorted five-card layout must be AABBB or AAABB.
    let first = sorted
        .iter()
        .take_while(|c| c.rank == sorted[0].rank)
        .count();
    let rest_uniform = sorted[first..].windows(2).all(|w| w[0].rank == w[1].rank);
    if rest_uniform && (first == 2 || first == 3) {
        Some(Pattern::from_sorted(Shape::FullHouse, sorted))
    } else {
        None
    }
}

/// Strength key of a full house: weight of the strongest card of its triple.
fn triple_key(sorted: &[Card]) -> u8 {
    let mut key = 0;
    let mut i = 0;
    while i < sorted.len() {
        let run = sorted[i..]
            .iter()
            .take_while(|c| c.rank == sorted[i].rank)
            .count();
        if run == 3 {
            key = sorted[i + run - 1].weight();
        }
        i += run;
    }
    key
}

/// Whether sorted, duplicate-free cards form a legal straight run under the
/// variant, length limits included.
pub(crate) fn is_straight_set(sorted: &[Card], variant: RuleVariant) -> bool {
    let table = variant.table();
    if !table.straight_lengths.contains(&sorted.len()) {
        return false;
    }
    if sorted.windows(2).any(|w| w[0].rank == w[1].rank) {
        return false;
    }
    match table.straight_scheme {
        StraightScheme::DeuceTops => consecutive_game_order(sorted),
        StraightScheme::DeuceWraps => {
            // The max rank sorts last, so "no deuce" is one check away.
            (sorted.last().is_some_and(|c| c.rank != Rank::Two)
                && consecutive_game_order(sorted))
                || wrap_ranks(
                    sorted,
                    [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five],
                )
                || wrap_ranks(
                    sorted,
                    [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six],
                )
        }
    }
}

fn consecutive_game_order(sorted: &[Card]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[1].rank as u8 == w[0].rank as u8 + 1)
}

fn wrap_ranks(sorted: &[Card], mut want: [Rank; 5]) -> bool {
    if sorted.len() != 5 {
        return false;
    }
    want.sort_unstable();
    sorted.iter().map(|c| c.rank).eq(want)
}
