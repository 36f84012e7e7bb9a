//! Metrics collection and output for simulation results.

use serde::Serialize;

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub seats: Vec<SeatMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub variant: String,
    pub strategies: [String; 4],
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub winner: u8,
    pub score_deltas: [i64; 4],
    pub plays: u32,
    pub passes: u32,
    pub rounds: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatMetrics {
    pub seat: u8,
    pub strategy: String,
    pub score_delta: i64,
    pub cards_left: u8,
    pub won: bool,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    variant: &str,
    strategies: [String; 4],
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let seats: Vec<SeatMetrics> = (0..4)
        .map(|seat| SeatMetrics {
            seat: seat as u8,
            strategy: strategies[seat].clone(),
            score_delta: result.score_deltas[seat],
            cards_left: result.cards_left[seat],
            won: result.winner as usize == seat,
        })
        .collect();

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: GameConfig {
            variant: variant.to_string(),
            strategies,
            total_games,
        },
        result: GameResultMetrics {
            winner: result.winner,
            score_deltas: result.score_deltas,
            plays: result.plays,
            passes: result.passes,
            rounds: result.rounds,
            duration_ms,
        },
        seats,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub variant: String,
    pub winner: u8,
    pub seat0_score: i64,
    pub seat1_score: i64,
    pub seat2_score: i64,
    pub seat3_score: i64,
    pub seat0_strategy: String,
    pub seat1_strategy: String,
    pub seat2_strategy: String,
    pub seat3_strategy: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            variant: metrics.config.variant.clone(),
            winner: metrics.result.winner,
            seat0_score: metrics.result.score_deltas[0],
            seat1_score: metrics.result.score_deltas[1],
            seat2_score: metrics.result.score_deltas[2],
            seat3_score: metrics.result.score_deltas[3],
            seat0_strategy: metrics.config.strategies[0].clone(),
            seat1_strategy: metrics.config.strategies[1].clone(),
            seat2_strategy: metrics.config.strategies[2].clone(),
            seat3_strategy: metrics.config.strategies[3].clone(),
        }
    }
}
