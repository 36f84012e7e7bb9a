use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::dealing::{deal, lead_holder};
use crate::domain::patterns::Pattern;
use crate::domain::rules::{RuleVariant, PLAYERS};
use crate::errors::GameError;

pub type Seat = u8; // 0..=3, clockwise

/// How strongly a computer seat plays.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyTier {
    Smart1,
    Smart2,
    Smart3,
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tier", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerKind {
    Human,
    Computer(StrategyTier),
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub kind: PlayerKind,
}

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Waiting for the opening play, which must include the lead card.
    Opening,
    /// Rounds of play and passing until a seat empties its hand.
    InPlay,
    /// A seat went out; only settlement remains.
    GameOver,
}

/// The play currently holding the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePlay {
    pub seat: Seat,
    pub pattern: Pattern,
}

/// Per-round state: the play to beat and the pass streak chasing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// Strongest play so far; `None` while a fresh round waits for its lead.
    pub table: Option<TablePlay>,
    /// Consecutive passes since the table play. Three close the round.
    pub passes: u8,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            table: None,
            passes: 0,
        }
    }
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Rule variant the game was created with; fixed for its lifetime.
    pub variant: RuleVariant,
    pub phase: Phase,
    /// Seat expected to act.
    /// - Some(seat) while the game is live
    /// - None once the game is over
    pub turn: Option<Seat>,
    pub players: [PlayerProfile; PLAYERS],
    /// Hidden hands, each kept sorted ascending by card weight.
    pub hands: [Vec<Card>; PLAYERS],
    /// Current round container.
    pub round: RoundState,
    /// Cumulative settled scores; lower is better.
    pub scores_total: [i64; PLAYERS],
    /// First seat to empty its hand.
    pub winner: Option<Seat>,
}

impl GameState {
    /// Deal a fresh game. The holder of the lead card opens.
    pub fn new(variant: RuleVariant, players: [PlayerProfile; PLAYERS], seed: u64) -> Self {
        let hands = deal(seed);
        let lead = variant.table().lead_card;
        // A full deal always places the lead card somewhere; seat 0 is the
        // unreachable fallback.
        let opener = lead_holder(&hands, lead).unwrap_or(0);
        Self {
            variant,
            phase: Phase::Opening,
            turn: Some(opener),
            players,
            hands,
            round: RoundState::empty(),
            scores_total: [0; PLAYERS],
            winner: None,
        }
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Bounds-check an externally supplied seat index.
pub fn require_seat(seat: Seat) -> Result<usize, GameError> {
    if (seat as usize) < PLAYERS {
        Ok(seat as usize)
    } else {
        Err(GameError::IndexOutOfRange(seat))
    }
}

/// The seat may act only while the game is live and it holds the turn.
pub fn require_turn(state: &GameState, seat: Seat) -> Result<(), GameError> {
    match state.turn {
        Some(expected) if expected == seat => Ok(()),
        expected => Err(GameError::OutOfTurn { seat, expected }),
    }
}
