//! In-memory game runner for strategy evaluation.
//!
//! Runs complete games straight against the rules engine, with no
//! persistence or transport in the way, so thousands of games finish in
//! seconds.

use daidi::ai::{Move, Strategy, StrategyError};
use daidi::domain::{
    seat_view, settle, submit_pass, submit_play, GameState, PlayerKind, PlayerProfile,
    RuleVariant, StrategyTier, PLAYERS,
};

/// Hard cap on turns per game. Legal games finish in a few hundred turns;
/// hitting the cap means a strategy kept the table spinning without ever
/// emptying a hand.
const MAX_TURNS: u32 = 10_000;

/// Result of simulating one complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Seat that shed its hand first.
    pub winner: u8,
    /// Settled score movement for each seat (zero-sum).
    pub score_deltas: [i64; PLAYERS],
    /// Accepted plays over the whole game.
    pub plays: u32,
    /// Accepted passes over the whole game.
    pub passes: u32,
    /// Rounds led, counting the opening round.
    pub rounds: u32,
    /// Cards still held per seat when the game ended.
    pub cards_left: [u8; PLAYERS],
}

/// In-memory game simulator.
///
/// Owns the game state and feeds each seat's view to its strategy until
/// someone goes out, then settles the scores.
pub struct Simulator {
    state: GameState,
}

impl Simulator {
    /// Set up a seeded game with a computer player in every seat.
    pub fn new(variant: RuleVariant, tiers: [StrategyTier; PLAYERS], seed: u64) -> Self {
        let players = std::array::from_fn(|i| PlayerProfile {
            name: format!("seat{i}"),
            kind: PlayerKind::Computer(tiers[i]),
        });
        Self {
            state: GameState::new(variant, players, seed),
        }
    }

    /// Simulate a complete game with the given strategies.
    ///
    /// Every move a strategy proposes goes through full engine validation,
    /// so an illegal proposal surfaces as an error instead of corrupting
    /// the game.
    pub fn simulate_game(
        mut self,
        strategies: &[Box<dyn Strategy + Send + Sync>; PLAYERS],
    ) -> Result<GameResult, SimulatorError> {
        let mut plays = 0u32;
        let mut passes = 0u32;
        let mut rounds = 1u32;

        for _ in 0..MAX_TURNS {
            let Some(seat) = self.state.turn else { break };

            let view = seat_view(&self.state, seat)
                .map_err(|e| SimulatorError::EngineError(format!("seat view failed: {e}")))?;

            let chosen = strategies[seat as usize]
                .choose_move(&view)
                .map_err(|e| SimulatorError::StrategyError(seat, e))?;

            match chosen {
                Move::Play(cards) => {
                    submit_play(&mut self.state, seat, &cards).map_err(|e| {
                        SimulatorError::EngineError(format!("play rejected for seat {seat}: {e}"))
                    })?;
                    plays += 1;
                }
                Move::Pass => {
                    let outcome = submit_pass(&mut self.state, seat).map_err(|e| {
                        SimulatorError::EngineError(format!("pass rejected for seat {seat}: {e}"))
                    })?;
                    passes += 1;
                    if outcome.round_closed {
                        rounds += 1;
                    }
                }
            }
        }

        if self.state.turn.is_some() {
            return Err(SimulatorError::Stalled(MAX_TURNS));
        }

        let winner = self
            .state
            .winner
            .ok_or_else(|| SimulatorError::InvalidState("finished game names no winner".into()))?;
        let score_deltas = settle(&mut self.state)
            .map_err(|e| SimulatorError::EngineError(format!("settlement failed: {e}")))?;
        let cards_left = std::array::from_fn(|i| self.state.hands[i].len() as u8);

        Ok(GameResult {
            winner,
            score_deltas,
            plays,
            passes,
            rounds,
            cards_left,
        })
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// A strategy returned an error
    StrategyError(u8, StrategyError),
    /// The rules engine rejected a submission or settlement
    EngineError(String),
    /// The game did not finish within the turn cap
    Stalled(u32),
    /// The game reached an incoherent state
    InvalidState(String),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::StrategyError(seat, err) => {
                write!(f, "strategy error (seat {seat}): {err}")
            }
            SimulatorError::EngineError(msg) => write!(f, "engine error: {msg}"),
            SimulatorError::Stalled(cap) => write!(f, "game stalled after {cap} turns"),
            SimulatorError::InvalidState(msg) => write!(f, "invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}
