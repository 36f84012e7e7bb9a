//! Smart2 - the shedding tier: dumps as many cards as it legally can.
//!
//! Deterministic (no RNG). Prefers ordinary shapes over trump tiers, then
//! the longest candidate, then the lowest strength key. Leads clear out
//! straights and full houses long before singles.

use std::cmp::Reverse;

use crate::ai::{Move, Strategy, StrategyError};
use crate::domain::player_view::SeatView;

#[derive(Clone)]
pub struct Smart2 {
    _seed: Option<u64>, // reserved; the tier is strictly deterministic
}

impl Smart2 {
    pub const NAME: &'static str = "smart2";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }
}

impl Strategy for Smart2 {
    fn choose_move(&self, view: &SeatView) -> Result<Move, StrategyError> {
        let table = view.variant.table();
        let chosen = view
            .legal_plays()
            .into_values()
            .flatten()
            .min_by_key(|p| (table.trump_tier(p.shape), Reverse(p.cards.len()), p.key));

        match chosen {
            Some(play) => Ok(Move::Play(play.cards)),
            None if view.leading => Err(StrategyError::InvalidMove(
                "leading with no legal plays".into(),
            )),
            None => Ok(Move::Pass),
        }
    }
}
