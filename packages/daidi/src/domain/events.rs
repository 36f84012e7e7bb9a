//! Observable game events derived from accepted submissions.

use serde::{Deserialize, Serialize};

use super::patterns::Pattern;
use super::playing::{PassOutcome, PlayOutcome};
use super::state::Seat;

/// Edge-triggered events a client or recorder can fan out after the engine
/// accepts a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    PlayMade { seat: Seat, pattern: Pattern },
    PassMade { seat: Seat },
    RoundClosed { leader: Seat },
    GameEnded { winner: Seat },
}

/// Events raised by an accepted play, in emission order.
pub fn events_for_play(seat: Seat, outcome: &PlayOutcome) -> Vec<GameEvent> {
    let mut events = vec![GameEvent::PlayMade {
        seat,
        pattern: outcome.pattern.clone(),
    }];
    if let Some(winner) = outcome.winner {
        events.push(GameEvent::GameEnded { winner });
    }
    events
}

/// Events raised by an accepted pass, in emission order.
pub fn events_for_pass(seat: Seat, outcome: &PassOutcome) -> Vec<GameEvent> {
    let mut events = vec![GameEvent::PassMade { seat }];
    if let Some(leader) = outcome.leader {
        events.push(GameEvent::RoundClosed { leader });
    }
    events
}
