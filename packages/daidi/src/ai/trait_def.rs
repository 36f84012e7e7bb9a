//! Strategy trait definition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::cards_types::Card;
use crate::domain::player_view::SeatView;

/// Errors that can occur during strategy decision-making.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The strategy faced or produced an impossible position.
    #[error("strategy invalid move: {0}")]
    InvalidMove(String),
    /// The strategy encountered an internal error.
    #[error("strategy internal error: {0}")]
    Internal(String),
}

/// A seat's chosen action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "cards", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Move {
    Play(Vec<Card>),
    Pass,
}

/// Trait for seat strategies.
///
/// Implementations receive the state visible to their seat and must choose
/// a legal action. Query [`SeatView::legal_plays`] instead of re-deriving
/// rules; an empty candidate map means the only legal action is a pass.
pub trait Strategy: Send + Sync {
    fn choose_move(&self, view: &SeatView) -> Result<Move, StrategyError>;
}
