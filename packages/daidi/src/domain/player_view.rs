//! Seat view of game state - what information is visible to one player.
//!
//! [`SeatView`] is the primary interface between the engine and strategies:
//! everything a seat can see at its decision point, plus a helper to query
//! legal moves. It also carries enough for a human player's screen.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::candidates::{playable_patterns, retain_containing};
use crate::domain::cards_types::Card;
use crate::domain::patterns::{Pattern, Shape};
use crate::domain::rules::{RuleVariant, PLAYERS};
use crate::domain::state::{require_seat, GameState, Phase, Seat, TablePlay};
use crate::errors::GameError;

/// Information visible to a seat at a decision point.
///
/// Opponent hands never appear here, only their card counts. Strategies
/// should pick from [`legal_plays()`](Self::legal_plays) instead of
/// re-implementing pattern or comparison rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    /// The observing seat.
    pub seat: Seat,
    pub variant: RuleVariant,
    /// The observer's hand, sorted ascending by weight.
    pub hand: Vec<Card>,
    /// The play to beat, if a round is underway.
    pub table: Option<TablePlay>,
    /// Consecutive passes chasing the table play.
    pub passes: u8,
    /// Cards left per seat, the observer included.
    pub cards_left: [u8; PLAYERS],
    /// True when the observer would lead a fresh round.
    pub leading: bool,
    /// True while the game still waits for the opening play.
    pub opening: bool,
}

/// Build the view `seat` sees right now.
pub fn seat_view(state: &GameState, seat: Seat) -> Result<SeatView, GameError> {
    let idx = require_seat(seat)?;
    Ok(SeatView {
        seat,
        variant: state.variant,
        hand: state.hands[idx].clone(),
        table: state.round.table.clone(),
        passes: state.round.passes,
        cards_left: std::array::from_fn(|i| state.hands[i].len() as u8),
        leading: state.round.table.is_none(),
        opening: state.phase == Phase::Opening,
    })
}

impl SeatView {
    /// Every legal play open to the observer, grouped by shape.
    ///
    /// An empty map means the only legal action is a pass. During the
    /// opening only plays containing the lead card remain.
    pub fn legal_plays(&self) -> BTreeMap<Shape, Vec<Pattern>> {
        let on_table = self.table.as_ref().map(|t| &t.pattern);
        let mut map = playable_patterns(&self.hand, on_table, self.variant);
        if self.opening {
            retain_containing(&mut map, self.variant.table().lead_card);
        }
        map
    }

    /// Fewest cards held by any opponent of the observer.
    pub fn min_opponent_cards(&self) -> u8 {
        self.cards_left
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.seat as usize)
            .map(|(_, n)| *n)
            .min()
            .unwrap_or(0)
    }
}
