//! Rule constants and the per-variant rule tables.
//!
//! Everything the two variants disagree on lives in `VariantTable` as data:
//! straight lengths, deuce placement inside straights, trump tiers, the
//! settlement rates and the required lead card. The classifier, comparator,
//! candidate finder and settlement read from the table instead of branching
//! on the variant.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Rank, Suit};
use super::patterns::Shape;

/// Fixed number of seats.
pub const PLAYERS: usize = 4;
/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 13;
/// Size of the full deck.
pub const DECK_SIZE: usize = 52;

/// The two house rule sets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleVariant {
    North,
    #[default]
    South,
}

/// How straight consecutiveness is judged.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StraightScheme {
    /// Runs follow the game's own rank order (3 < ... < A < 2); the deuce
    /// only ever tops a run.
    DeuceTops,
    /// Runs follow natural Ace-high order, and the deuce may break low into
    /// the two wraps A-2-3-4-5 and 2-3-4-5-6.
    DeuceWraps,
}

/// Per-variant rule data.
#[derive(Debug, Clone)]
pub struct VariantTable {
    /// Legal straight lengths. Straight flushes stay five-card runs.
    pub straight_lengths: RangeInclusive<usize>,
    pub straight_scheme: StraightScheme,
    /// Trump tier of the bomb shape.
    pub bomb_tier: u8,
    /// Trump tier of the straight flush (0 = ordinary five-card play).
    pub straight_flush_tier: u8,
    /// Settlement penalty per unplayed card.
    pub penalty_per_card: i64,
    /// Remaining-card count at which a loser's penalty doubles.
    pub big_loser_threshold: Option<usize>,
    /// The game's first play must contain this card.
    pub lead_card: Card,
}

static NORTH_TABLE: VariantTable = VariantTable {
    straight_lengths: 5..=13,
    straight_scheme: StraightScheme::DeuceTops,
    bomb_tier: 1,
    straight_flush_tier: 2,
    penalty_per_card: 1,
    big_loser_threshold: None,
    lead_card: Card {
        suit: Suit::Diamonds,
        rank: Rank::Three,
    },
};

static SOUTH_TABLE: VariantTable = VariantTable {
    straight_lengths: 5..=5,
    straight_scheme: StraightScheme::DeuceWraps,
    bomb_tier: 1,
    straight_flush_tier: 0,
    penalty_per_card: 2,
    big_loser_threshold: Some(10),
    lead_card: Card {
        suit: Suit::Diamonds,
        rank: Rank::Three,
    },
};

impl RuleVariant {
    /// The rule table for this variant.
    pub fn table(self) -> &'static VariantTable {
        match self {
            RuleVariant::North => &NORTH_TABLE,
            RuleVariant::South => &SOUTH_TABLE,
        }
    }
}

impl VariantTable {
    /// Trump tier of a shape. A higher tier beats any lower-tier play
    /// regardless of shape or cardinality; tier 0 plays compare
    /// shape-for-shape.
    pub fn trump_tier(&self, shape: Shape) -> u8 {
        match shape {
            Shape::Bomb => self.bomb_tier,
            Shape::StraightFlush => self.straight_flush_tier,
            _ => 0,
        }
    }
}
