//! Smart1 - the baseline tier: always sheds its weakest candidate.
//!
//! Deterministic (no RNG). Prefers ordinary shapes over trump tiers, then
//! the lowest strength key, then the fewest cards. It never looks at
//! opponents and never holds anything back.

use crate::ai::{Move, Strategy, StrategyError};
use crate::domain::player_view::SeatView;

#[derive(Clone)]
pub struct Smart1 {
    _seed: Option<u64>, // reserved; the tier is strictly deterministic
}

impl Smart1 {
    pub const NAME: &'static str = "smart1";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }
}

impl Strategy for Smart1 {
    fn choose_move(&self, view: &SeatView) -> Result<Move, StrategyError> {
        let table = view.variant.table();
        let weakest = view
            .legal_plays()
            .into_values()
            .flatten()
            .min_by_key(|p| (table.trump_tier(p.shape), p.key, p.cards.len()));

        match weakest {
            Some(play) => Ok(Move::Play(play.cards)),
            None if view.leading => Err(StrategyError::InvalidMove(
                "leading with no legal plays".into(),
            )),
            None => Ok(Move::Pass),
        }
    }
}
