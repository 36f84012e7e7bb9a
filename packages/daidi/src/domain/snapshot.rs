//! Public snapshot API for observing game state without exposing hands.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::patterns::Shape;
use crate::domain::rules::{RuleVariant, PLAYERS};
use crate::domain::state::{GameState, Phase, PlayerKind, Seat};

/// Public info about a single seat in the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub name: String,
    pub kind: PlayerKind,
    pub cards_left: u8,
    pub score_total: i64,
}

/// The table play as everyone sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TablePublic {
    pub seat: Seat,
    pub shape: Shape,
    pub cards: Vec<Card>,
}

/// Top-level snapshot combining seating and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub variant: RuleVariant,
    pub seating: [SeatPublic; PLAYERS],
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Opening(OpeningSnapshot),
    InPlay(InPlaySnapshot),
    GameOver(GameOverSnapshot),
}

/// Opening phase snapshot: everyone waits for the lead-card play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpeningSnapshot {
    pub to_act: Seat,
    pub lead_card: Card,
}

/// Mid-game snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InPlaySnapshot {
    pub to_act: Seat,
    /// None while a fresh round waits for its lead play.
    pub table: Option<TablePublic>,
    pub passes: u8,
}

/// Finished-game snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOverSnapshot {
    pub winner: Seat,
}

/// Entry point: produce a snapshot of the current game state.
/// Never panics; produces safe defaults for inconsistent states.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let phase = match state.phase {
        Phase::Opening => PhaseSnapshot::Opening(OpeningSnapshot {
            to_act: state.turn.unwrap_or(0),
            lead_card: state.variant.table().lead_card,
        }),
        Phase::InPlay => PhaseSnapshot::InPlay(InPlaySnapshot {
            to_act: state.turn.unwrap_or(0),
            table: state.round.table.as_ref().map(|t| TablePublic {
                seat: t.seat,
                shape: t.pattern.shape,
                cards: t.pattern.cards.clone(),
            }),
            passes: state.round.passes,
        }),
        Phase::GameOver => PhaseSnapshot::GameOver(GameOverSnapshot {
            winner: state.winner.unwrap_or(0),
        }),
    };

    GameSnapshot {
        variant: state.variant,
        seating: build_seating(state),
        phase,
    }
}

fn build_seating(state: &GameState) -> [SeatPublic; PLAYERS] {
    std::array::from_fn(|i| SeatPublic {
        seat: i as Seat,
        name: state.players[i].name.clone(),
        kind: state.players[i].kind,
        cards_left: state.hands[i].len() as u8,
        score_total: state.scores_total[i],
    })
}
