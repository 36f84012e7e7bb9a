//! Turn engine: play and pass submission.
//!
//! Both entry points validate fully before touching anything, so a rejected
//! submission leaves the state exactly as it was.

use std::collections::BTreeMap;

use tracing::debug;

use super::candidates::{playable_patterns, retain_containing};
use super::cards_types::Card;
use super::comparing::beats;
use super::patterns::{classify, Pattern, Shape};
use super::rules::PLAYERS;
use super::state::{
    next_seat, require_seat, require_turn, GameState, Phase, RoundState, Seat, TablePlay,
};
use crate::errors::GameError;

/// What an accepted play did.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    /// The classified pattern the submission formed.
    pub pattern: Pattern,
    /// Cards left in the acting seat's hand.
    pub cards_left: usize,
    pub game_over: bool,
    pub winner: Option<Seat>,
}

/// What an accepted pass did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PassOutcome {
    /// True when this pass was the third in a row and closed the round.
    pub round_closed: bool,
    /// Seat leading the next round, when the round closed.
    pub leader: Option<Seat>,
}

/// Submit `cards` as `seat`'s play.
///
/// The cards must all sit in the seat's hand, form a pattern under the
/// game's variant, and beat the table play (the opening play must also
/// contain the lead card). On success the hand shrinks, the table and turn
/// advance, and an emptied hand ends the game.
pub fn submit_play(
    state: &mut GameState,
    seat: Seat,
    cards: &[Card],
) -> Result<PlayOutcome, GameError> {
    let idx = require_seat(seat)?;
    require_turn(state, seat)?;

    // Withdraw the submission from a scratch copy of the hand. A card
    // missing there is either foreign or submitted twice.
    let mut remaining = state.hands[idx].clone();
    for card in cards {
        match remaining.iter().position(|c| c == card) {
            Some(at) => {
                remaining.swap_remove(at);
            }
            None => return Err(GameError::CardNotInHand { seat, card: *card }),
        }
    }

    let pattern = classify(cards, state.variant).ok_or(GameError::IllegalPattern)?;

    if state.phase == Phase::Opening {
        let lead = state.variant.table().lead_card;
        if !pattern.cards.contains(&lead) {
            return Err(GameError::MustIncludeLeadCard(lead));
        }
    }

    if let Some(table_play) = state.round.table.as_ref() {
        if !beats(&pattern, Some(&table_play.pattern), state.variant) {
            return Err(GameError::DoesNotBeat {
                candidate: pattern.shape,
                on_table: table_play.pattern.shape,
            });
        }
    }

    // Validation passed; commit.
    remaining.sort_unstable();
    let cards_left = remaining.len();
    state.hands[idx] = remaining;

    let game_over = cards_left == 0;
    if game_over {
        // The winning play closes its own round; nothing is left to chase.
        state.round = RoundState::empty();
        state.phase = Phase::GameOver;
        state.winner = Some(seat);
        state.turn = None;
    } else {
        state.round.table = Some(TablePlay {
            seat,
            pattern: pattern.clone(),
        });
        state.round.passes = 0;
        if state.phase == Phase::Opening {
            state.phase = Phase::InPlay;
        }
        state.turn = Some(next_seat(seat));
    }
    debug!(seat, shape = ?pattern.shape, cards_left, game_over, "play accepted");

    Ok(PlayOutcome {
        pattern,
        cards_left,
        game_over,
        winner: if game_over { Some(seat) } else { None },
    })
}

/// Pass for `seat`.
///
/// Passing is only legal while chasing a table play; the round's leader may
/// never pass away a fresh table. The third consecutive pass closes the
/// round, clears the table, and hands the lead back to the table holder.
pub fn submit_pass(state: &mut GameState, seat: Seat) -> Result<PassOutcome, GameError> {
    require_seat(seat)?;
    require_turn(state, seat)?;

    let Some(table_play) = state.round.table.as_ref() else {
        return Err(GameError::CannotPassWhenLeading);
    };
    let leader = table_play.seat;

    state.round.passes += 1;
    if state.round.passes as usize >= PLAYERS - 1 {
        state.round = RoundState::empty();
        state.turn = Some(leader);
        debug!(seat, leader, "round closed");
        return Ok(PassOutcome {
            round_closed: true,
            leader: Some(leader),
        });
    }

    state.turn = Some(next_seat(seat));
    Ok(PassOutcome {
        round_closed: false,
        leader: None,
    })
}

/// Every legal play open to `seat` right now, grouped by shape.
///
/// An empty map means the seat holds nothing that answers the table and has
/// to pass. During the opening only plays containing the lead card remain.
pub fn legal_plays(
    state: &GameState,
    seat: Seat,
) -> Result<BTreeMap<Shape, Vec<Pattern>>, GameError> {
    let idx = require_seat(seat)?;
    let on_table = state.round.table.as_ref().map(|t| &t.pattern);
    let mut map = playable_patterns(&state.hands[idx], on_table, state.variant);
    if state.phase == Phase::Opening {
        retain_containing(&mut map, state.variant.table().lead_card);
    }
    Ok(map)
}
