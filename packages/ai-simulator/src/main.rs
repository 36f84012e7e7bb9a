//! Strategy simulator CLI - fast in-memory game simulation.
//!
//! Runs complete games straight against the rules engine, with no
//! persistence or transport overhead, allowing rapid comparison of
//! strategy tiers across many seeded deals.

mod metrics;
mod output;
mod simulator;
mod types;

use clap::{Parser, ValueEnum};
use daidi::ai::{strategy_for_tier, Strategy};
use daidi::domain::{derive_deal_seed, RuleVariant, StrategyTier, PLAYERS};
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use std::time::Instant;
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory game simulator for strategy evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Strategy for all seats (shortcut to set all 4 seats to the same tier)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<TierChoice>,

    /// Strategy for seat 0
    #[arg(long, default_value = "smart1")]
    seat0: TierChoice,

    /// Strategy for seat 1
    #[arg(long, default_value = "smart1")]
    seat1: TierChoice,

    /// Strategy for seat 2
    #[arg(long, default_value = "smart1")]
    seat2: TierChoice,

    /// Strategy for seat 3
    #[arg(long, default_value = "smart1")]
    seat3: TierChoice,

    /// Rule variant the games are played under
    #[arg(long, default_value = "south")]
    variant: VariantChoice,

    /// Base seed for deterministic runs; each game deals from a seed
    /// derived from it
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the per-game output file
    #[arg(long)]
    compress: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TierChoice {
    Smart1,
    Smart2,
    Smart3,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantChoice {
    North,
    South,
}

impl TierChoice {
    fn tier(self) -> StrategyTier {
        match self {
            TierChoice::Smart1 => StrategyTier::Smart1,
            TierChoice::Smart2 => StrategyTier::Smart2,
            TierChoice::Smart3 => StrategyTier::Smart3,
        }
    }

    fn name(self) -> &'static str {
        match self {
            TierChoice::Smart1 => "smart1",
            TierChoice::Smart2 => "smart2",
            TierChoice::Smart3 => "smart3",
        }
    }
}

impl VariantChoice {
    fn variant(self) -> RuleVariant {
        match self {
            VariantChoice::North => RuleVariant::North,
            VariantChoice::South => RuleVariant::South,
        }
    }

    fn name(self) -> &'static str {
        match self {
            VariantChoice::North => "north",
            VariantChoice::South => "south",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.show_output {
        info!("Starting strategy simulator");
        info!(
            "Configuration: {} games, {} variant",
            args.games,
            args.variant.name()
        );
    }

    // Use --seats when given, otherwise the individual seat parameters
    let seat_choices: [TierChoice; PLAYERS] = if let Some(all) = args.seats {
        [all; PLAYERS]
    } else {
        [args.seat0, args.seat1, args.seat2, args.seat3]
    };

    if args.show_output {
        info!(
            "Strategies: seat0={}, seat1={}, seat2={}, seat3={}",
            seat_choices[0].name(),
            seat_choices[1].name(),
            seat_choices[2].name(),
            seat_choices[3].name()
        );
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let strategy_names = [
        seat_choices[0].name().to_string(),
        seat_choices[1].name().to_string(),
        seat_choices[2].name().to_string(),
        seat_choices[3].name().to_string(),
    ];
    let strategies: [Box<dyn Strategy + Send + Sync>; PLAYERS] = [
        strategy_for_tier(seat_choices[0].tier()),
        strategy_for_tier(seat_choices[1].tier()),
        strategy_for_tier(seat_choices[2].tier()),
        strategy_for_tier(seat_choices[3].tier()),
    ];
    let tiers: [StrategyTier; PLAYERS] = std::array::from_fn(|i| seat_choices[i].tier());

    let base_seed = match args.seed {
        Some(seed) => seed,
        None => rand::random(),
    };
    if args.show_output {
        info!("Base seed: {}", base_seed);
    }
    let variant = args.variant.variant();

    // Run simulations
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_no in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = derive_deal_seed(base_seed, u64::from(game_no));

        let game_res = Simulator::new(variant, tiers, game_seed).simulate_game(&strategies);

        match game_res {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;

                let game_metrics = build_game_metrics(
                    game_no,
                    game_seed,
                    args.variant.name(),
                    strategy_names.clone(),
                    args.games,
                    &result,
                    duration_ms,
                );

                if let Err(e) = output_writer.write_game(&game_metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_no, e);
                }

                if args.verbose {
                    info!(
                        "Game {} completed: winner={}, deltas={:?}",
                        game_no, result.winner, result.score_deltas
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_no, e);
            }
        }
    }

    let elapsed = start.elapsed();

    // Get output file paths before finishing
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path_clone = jsonl_path.cloned();
    let csv_path_clone = csv_path.cloned();

    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path_clone {
            info!("Detailed results written to: {}", path.display());
        }
        if let Some(path) = csv_path_clone {
            info!("Summary CSV written to: {}", path.display());
        }

        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if !results.is_empty() {
        println!(
            "Average time per game: {:?}",
            elapsed / results.len() as u32
        );
    }

    if results.is_empty() {
        return;
    }

    // Deltas are penalty points, so negative is good; the winner of a game
    // collects the losers' penalties.
    let mut wins = [0u32; PLAYERS];
    let mut total_deltas = [0i64; PLAYERS];
    let mut best = [i64::MAX; PLAYERS];
    let mut worst = [i64::MIN; PLAYERS];

    for result in results {
        wins[result.winner as usize] += 1;
        for (seat, &delta) in result.score_deltas.iter().enumerate() {
            total_deltas[seat] += delta;
            best[seat] = best[seat].min(delta);
            worst[seat] = worst[seat].max(delta);
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..PLAYERS {
        let avg_delta = total_deltas[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {}: avg={:+.1}, best={:+}, worst={:+}, wins={} ({:.1}%)",
            seat, avg_delta, best[seat], worst[seat], wins[seat], win_rate
        );
    }
}
