//! Batch runner for the Poker Squares Monte Carlo player.
//!
//! Plays seeded batches of games and reports score statistics, or plays
//! proximity-biased and uniform rollouts on identical decks to compare them.

use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use squares_core::{Deck, GameDriver, GameRecord, HandTable};
use squares_mc::{McConfig, MonteCarloPlayer, NeighborBounds, SearchBudget, UniformRollout};
use std::time::{Duration, Instant};

/// Poker Squares Monte Carlo player.
#[derive(Parser)]
#[command(name = "squares-play")]
#[command(about = "Play Poker Squares with a Monte Carlo lookahead player")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a batch of games and report scores.
    Play {
        #[command(flatten)]
        opts: RunOptions,
    },

    /// Play proximity and uniform rollouts on the same decks.
    Compare {
        #[command(flatten)]
        opts: RunOptions,
    },
}

#[derive(Args, Clone, Debug)]
struct RunOptions {
    /// Number of games to play.
    #[arg(short, long, default_value = "10")]
    games: usize,

    /// Random seed for reproducibility.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Simulated plays per rollout.
    #[arg(short, long, default_value = "2")]
    depth: usize,

    /// Time allowed for one whole game, in milliseconds.
    #[arg(long, default_value = "30000")]
    game_millis: u64,

    /// Point table used for rollouts and final scores.
    #[arg(short, long, value_enum, default_value = "american")]
    points: Points,

    /// Fixed rollouts per candidate cell instead of the time budget.
    #[arg(short, long)]
    rollouts: Option<usize>,

    /// Opening turns placed without search.
    #[arg(long, default_value = "0")]
    opening_turns: usize,

    /// Probe neighbors with the legacy bounds.
    #[arg(long)]
    legacy_bounds: bool,

    /// Use uniform rollouts instead of proximity-biased ones (play only).
    #[arg(long)]
    uniform: bool,

    /// Print one JSON object per line instead of text.
    #[arg(long)]
    json: bool,
}

impl RunOptions {
    fn config(&self) -> McConfig {
        McConfig {
            depth_limit: self.depth,
            budget: match self.rollouts {
                Some(n) => SearchBudget::Rollouts(n),
                None => SearchBudget::TimeSlice,
            },
            opening_turns: self.opening_turns,
            neighbor_bounds: if self.legacy_bounds {
                NeighborBounds::Legacy
            } else {
                NeighborBounds::Strict
            },
        }
    }

    fn game_time(&self) -> Duration {
        Duration::from_millis(self.game_millis)
    }

    /// Deck and player seeds for the `index`th game.
    fn game_seeds(&self, index: usize) -> (u64, u64) {
        let game_seed = self.seed.wrapping_add(index as u64 * 1000);
        (game_seed, game_seed.wrapping_add(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Points {
    American,
    British,
}

impl Points {
    fn table(self) -> HandTable {
        match self {
            Points::American => HandTable::american(),
            Points::British => HandTable::british(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Policy {
    Proximity,
    Uniform,
}

/// One finished game, as printed with `--json`.
#[derive(Serialize)]
struct GameLine<'a> {
    game: usize,
    seed: u64,
    policy: Policy,
    #[serde(flatten)]
    record: &'a GameRecord,
}

/// Aggregate scores for one batch.
#[derive(Debug, Serialize)]
struct BatchSummary {
    policy: Policy,
    points: Points,
    games: usize,
    mean: f64,
    min: i32,
    max: i32,
    timed_out: usize,
    elapsed_ms: u64,
}

impl BatchSummary {
    fn new(policy: Policy, points: Points, records: &[GameRecord], elapsed: Duration) -> Self {
        let total: i64 = records.iter().map(|r| i64::from(r.score)).sum();
        Self {
            policy,
            points,
            games: records.len(),
            mean: total as f64 / records.len().max(1) as f64,
            min: records.iter().map(|r| r.score).min().unwrap_or(0),
            max: records.iter().map(|r| r.score).max().unwrap_or(0),
            timed_out: records.iter().filter(|r| r.timed_out).count(),
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}

/// Play the `index`th game of a batch.
fn play_game(opts: &RunOptions, policy: Policy, index: usize) -> Result<GameRecord> {
    let (deck_seed, player_seed) = opts.game_seeds(index);
    let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(deck_seed));
    let rng = ChaCha8Rng::seed_from_u64(player_seed);
    let driver = GameDriver::new(opts.points.table(), opts.game_time());
    let table = opts.points.table();

    let record = match policy {
        Policy::Proximity => {
            let mut player = MonteCarloPlayer::new(opts.config(), table, rng);
            driver.play(&mut player, &deck)
        }
        Policy::Uniform => {
            let mut player = MonteCarloPlayer::with_policy(opts.config(), table, UniformRollout, rng);
            driver.play(&mut player, &deck)
        }
    };
    record.with_context(|| format!("Game {} (seed {}) failed", index, deck_seed))
}

/// Play a whole batch in parallel, one player per game.
fn run_batch(opts: &RunOptions, policy: Policy) -> Result<(Vec<GameRecord>, BatchSummary)> {
    info!(
        "{} games, {:?} rollouts, depth {}, {:?} points",
        opts.games, policy, opts.depth, opts.points
    );
    let start = Instant::now();

    let records = (0..opts.games)
        .into_par_iter()
        .map(|i| play_game(opts, policy, i))
        .collect::<Result<Vec<_>>>()?;

    let summary = BatchSummary::new(policy, opts.points, &records, start.elapsed());
    Ok((records, summary))
}

fn print_games(opts: &RunOptions, policy: Policy, records: &[GameRecord]) -> Result<()> {
    for (i, record) in records.iter().enumerate() {
        if opts.json {
            let line = GameLine {
                game: i,
                seed: opts.game_seeds(i).0,
                policy,
                record,
            };
            println!(
                "{}",
                serde_json::to_string(&line).with_context(|| format!("Failed to serialize game {}", i))?
            );
        } else {
            let flag = if record.timed_out { " (timed out)" } else { "" };
            println!(
                "Game {}/{}: {} points in {}ms{}",
                i + 1,
                records.len(),
                record.score,
                record.elapsed_ms,
                flag
            );
        }
    }
    Ok(())
}

fn print_summary(opts: &RunOptions, summary: &BatchSummary) -> Result<()> {
    if opts.json {
        println!(
            "{}",
            serde_json::to_string(summary).context("Failed to serialize summary")?
        );
    } else {
        println!("------------------------------------------------");
        println!("Policy:     {:?}", summary.policy);
        println!("Games:      {}", summary.games);
        println!("Mean score: {:.2}", summary.mean);
        println!("Min / max:  {} / {}", summary.min, summary.max);
        println!("Timed out:  {}", summary.timed_out);
        println!("Completed in {:.2}s", summary.elapsed_ms as f64 / 1000.0);
    }
    Ok(())
}

/// Run the play command.
fn cmd_play(opts: &RunOptions) -> Result<()> {
    ensure!(opts.games > 0, "--games must be at least 1");

    let policy = if opts.uniform {
        Policy::Uniform
    } else {
        Policy::Proximity
    };
    let (records, summary) = run_batch(opts, policy)?;

    print_games(opts, policy, &records)?;
    print_summary(opts, &summary)
}

/// Run the compare command.
fn cmd_compare(opts: &RunOptions) -> Result<()> {
    ensure!(opts.games > 0, "--games must be at least 1");

    let (_, proximity) = run_batch(opts, Policy::Proximity)?;
    let (_, uniform) = run_batch(opts, Policy::Uniform)?;

    print_summary(opts, &proximity)?;
    print_summary(opts, &uniform)?;
    if !opts.json {
        println!("================================================");
        println!(
            "Proximity - uniform: {:+.2} points per game",
            proximity.mean - uniform.mean
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { opts } => cmd_play(&opts),
        Commands::Compare { opts } => cmd_compare(&opts),
    }
}
