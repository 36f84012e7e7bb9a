//! Smart3 - the control tier: finishes when it can, pressures short
//! opponents, and otherwise keeps its controls in reserve.
//!
//! Deterministic (no RNG). In order:
//! 1. Any candidate that empties the hand is played outright.
//! 2. With an opponent at or under the pressure threshold, the strongest
//!    candidate goes out to keep the lead away from them.
//! 3. Otherwise the weakest non-control candidate is shed. Controls are
//!    trump-tier plays and ace-or-better singles.
//! 4. Holding only controls: pass while chasing, spend the weakest control
//!    when leading.

use crate::ai::{Move, Strategy, StrategyError};
use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::patterns::{Pattern, Shape};
use crate::domain::player_view::SeatView;
use crate::domain::rules::VariantTable;

/// Opponent hand size that flips Smart3 into pressure mode.
const PRESSURE_THRESHOLD: u8 = 3;

#[derive(Clone)]
pub struct Smart3 {
    _seed: Option<u64>, // reserved; the tier is strictly deterministic
}

impl Smart3 {
    pub const NAME: &'static str = "smart3";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }

    /// Controls are plays worth holding back: trump-tier shapes and
    /// ace-or-better singles.
    fn is_control(table: &VariantTable, p: &Pattern) -> bool {
        if table.trump_tier(p.shape) > 0 {
            return true;
        }
        p.shape == Shape::Single && p.key >= ace_floor()
    }
}

/// Weight of the lowest ace; singles from here up win most tables.
fn ace_floor() -> u8 {
    Card {
        suit: Suit::Spades,
        rank: Rank::Ace,
    }
    .weight()
}

impl Strategy for Smart3 {
    fn choose_move(&self, view: &SeatView) -> Result<Move, StrategyError> {
        let table = view.variant.table();
        let candidates: Vec<Pattern> = view.legal_plays().into_values().flatten().collect();
        if candidates.is_empty() {
            if view.leading {
                return Err(StrategyError::InvalidMove(
                    "leading with no legal plays".into(),
                ));
            }
            return Ok(Move::Pass);
        }

        // Going out beats every other consideration.
        if let Some(finisher) = candidates
            .iter()
            .filter(|p| p.cards.len() == view.hand.len())
            .max_by_key(|p| (table.trump_tier(p.shape), p.key))
        {
            return Ok(Move::Play(finisher.cards.clone()));
        }

        // An opponent is about to go out: answer with strength.
        if view.min_opponent_cards() <= PRESSURE_THRESHOLD {
            if let Some(strongest) = candidates
                .iter()
                .max_by_key(|p| (table.trump_tier(p.shape), p.key, p.cards.len()))
            {
                return Ok(Move::Play(strongest.cards.clone()));
            }
        }

        // Normal development: shed the weakest non-control.
        if let Some(weakest) = candidates
            .iter()
            .filter(|p| !Self::is_control(table, p))
            .min_by_key(|p| (table.trump_tier(p.shape), p.key, p.cards.len()))
        {
            return Ok(Move::Play(weakest.cards.clone()));
        }

        // Only controls remain: spend one to develop a lead, never to chase.
        if view.leading {
            if let Some(cheapest) = candidates
                .iter()
                .min_by_key(|p| (table.trump_tier(p.shape), p.key, p.cards.len()))
            {
                return Ok(Move::Play(cheapest.cards.clone()));
            }
        }
        Ok(Move::Pass)
    }
}
