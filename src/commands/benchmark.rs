//! Benchmark command
//!
//! Plays many seeded duels in parallel and aggregates the results.

use super::duel::{DuelResult, run_duel};
use crate::core::Vocabulary;
use crate::game::{MatchConfig, MoveError, Side};
use crate::strategy::MoveStrategy;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Settings for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of duels to play
    pub games: usize,
    /// Base seed; game `i` uses `seed + i`
    pub seed: u64,
    pub match_config: MatchConfig,
    /// Show a progress bar on stderr
    pub progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 0,
            match_config: MatchConfig::default(),
            progress: false,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub challenger: &'static str,
    pub bot: &'static str,
    /// Completed duels; failed ones are counted in `failed` only
    pub total_games: usize,
    /// Duels the engine refused to play through
    pub failed: usize,
    pub challenger_wins: usize,
    pub bot_wins: usize,
    /// Games stopped by the turn limit
    pub unfinished: usize,
    pub total_words: usize,
    pub average_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub distribution: HashMap<usize, usize>,
    pub violations: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    /// Share of games the bot won, in percent
    #[must_use]
    pub fn bot_win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.bot_wins as f64 / self.total_games as f64 * 100.0
    }

    /// Share of games the challenger won, in percent
    #[must_use]
    pub fn challenger_win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.challenger_wins as f64 / self.total_games as f64 * 100.0
    }
}

/// Run `config.games` duels between fresh strategies
///
/// Strategies are built per game from the seed so parallel games never share
/// generator state. Openings rotate through the vocabulary in load order.
pub fn run_benchmark<C, B, FC, FB>(
    vocabulary: &Vocabulary,
    make_challenger: FC,
    make_bot: FB,
    config: &BenchmarkConfig,
) -> BenchmarkResult
where
    C: MoveStrategy,
    B: MoveStrategy,
    FC: Fn(u64) -> C + Sync,
    FB: Fn(u64) -> B + Sync,
{
    let openings: Vec<&str> = vocabulary.iter().map(|entry| entry.normalized()).collect();
    let pb = if config.progress {
        create_progress_bar(config.games as u64)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes: Vec<Result<DuelResult, MoveError>> = (0..config.games)
        .into_par_iter()
        .map(|game| {
            let seed = config.seed.wrapping_add(game as u64);
            let opening = (!openings.is_empty()).then(|| openings[game % openings.len()]);
            let duel = run_duel(
                vocabulary,
                make_challenger(seed),
                make_bot(seed.rotate_left(32)),
                config.match_config,
                opening,
            );
            pb.inc(1);
            duel
        })
        .collect();
    pb.finish_and_clear();

    let (duels, failed): (Vec<_>, Vec<_>) = outcomes.into_iter().partition(Result::is_ok);
    let duels: Vec<DuelResult> = duels.into_iter().flatten().collect();

    let mut result = summarize(&duels, failed.len(), start.elapsed());
    result.challenger = make_challenger(config.seed).name();
    result.bot = make_bot(config.seed).name();
    result
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

fn summarize(duels: &[DuelResult], failed: usize, duration: Duration) -> BenchmarkResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_words = 0;
    let mut min_length = usize::MAX;
    let mut max_length = 0;
    let mut challenger_wins = 0;
    let mut bot_wins = 0;
    let mut unfinished = 0;
    let mut violations = 0;

    for duel in duels {
        let length = duel.len();
        total_words += length;
        min_length = min_length.min(length);
        max_length = max_length.max(length);
        *distribution.entry(length).or_insert(0) += 1;
        violations += duel.violations;

        match duel.winner {
            Some(Side::Player) => challenger_wins += 1,
            Some(Side::Bot) => bot_wins += 1,
            None => unfinished += 1,
        }
    }

    let total_games = duels.len();
    let (average_length, min_length) = if total_games == 0 {
        (0.0, 0)
    } else {
        (total_words as f64 / total_games as f64, min_length)
    };

    BenchmarkResult {
        challenger: "",
        bot: "",
        total_games,
        failed,
        challenger_wins,
        bot_wins,
        unfinished,
        total_words,
        average_length,
        min_length,
        max_length,
        distribution,
        violations,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
