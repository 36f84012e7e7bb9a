//! Engine error taxonomy.
//!
//! Every rule violation is a recoverable `Err`; rejected submissions never
//! mutate state and are never silently dropped. `IndexOutOfRange` is the one
//! programmer-error variant; callers may treat it as fatal.

use thiserror::Error;

use crate::domain::cards_types::Card;
use crate::domain::patterns::Shape;
use crate::domain::state::Seat;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The acting seat is not the turn holder, or nobody may act anymore.
    #[error("seat {seat} is out of turn (expected {expected:?})")]
    OutOfTurn { seat: Seat, expected: Option<Seat> },

    /// A submitted card is not (or no longer) in the acting seat's hand.
    /// Also raised when the same card is submitted twice in one play.
    #[error("card {card} is not in seat {seat}'s hand")]
    CardNotInHand { seat: Seat, card: Card },

    /// The card set matches no shape under the active rule variant.
    #[error("cards do not form a playable pattern")]
    IllegalPattern,

    /// The classified play does not beat the play on the table.
    #[error("{candidate:?} does not beat the {on_table:?} on the table")]
    DoesNotBeat { candidate: Shape, on_table: Shape },

    /// A pass was submitted while the seat is leading a fresh round.
    #[error("cannot pass while leading")]
    CannotPassWhenLeading,

    /// The first play of the game must contain the lead card.
    #[error("the first play of the game must include the {0}")]
    MustIncludeLeadCard(Card),

    /// Settlement requested before the game ended.
    #[error("the game is not over yet")]
    GameNotOver,

    /// Seat index outside 0..=3. Programmer error.
    #[error("seat index {0} out of range")]
    IndexOutOfRange(u8),

    /// A card token could not be parsed (e.g. from "3D" form).
    #[error("parse card: {0}")]
    ParseCard(String),
}
