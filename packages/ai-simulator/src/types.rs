//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One JSON record per game, plus the CSV summary
    Jsonl,
    /// CSV summary only
    Summary,
}
