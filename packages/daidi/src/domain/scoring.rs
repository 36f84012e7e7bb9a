//! End-of-game settlement.

use tracing::debug;

use super::rules::PLAYERS;
use super::state::{GameState, Phase};
use crate::errors::GameError;

/// Settle a finished game into per-seat score deltas.
///
/// Each loser pays one point per card still held, scaled by the variant's
/// per-card penalty and doubled once more for big losers where the variant
/// sets a threshold. The winner collects the lot, so every settlement sums
/// to zero; lower totals are better. The deltas also fold into
/// `scores_total`. Call once per finished game.
pub fn settle(state: &mut GameState) -> Result<[i64; PLAYERS], GameError> {
    if state.phase != Phase::GameOver {
        return Err(GameError::GameNotOver);
    }
    let Some(winner) = state.winner else {
        return Err(GameError::GameNotOver);
    };

    let table = state.variant.table();
    let mut deltas = [0i64; PLAYERS];
    for (seat, hand) in state.hands.iter().enumerate() {
        if seat == winner as usize {
            continue;
        }
        let cards_left = hand.len();
        let mut penalty = cards_left as i64 * table.penalty_per_card;
        if let Some(threshold) = table.big_loser_threshold {
            if cards_left >= threshold {
                penalty *= 2;
            }
        }
        deltas[seat] = penalty;
    }
    let paid: i64 = deltas.iter().sum();
    deltas[winner as usize] = -paid;

    for (total, delta) in state.scores_total.iter_mut().zip(deltas) {
        *total += delta;
    }
    debug!(winner, ?deltas, "game settled");
    Ok(deltas)
}
