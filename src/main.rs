//! Atlas - CLI
//!
//! Word-chain game against pluggable bot strategies, plus strategy duels,
//! benchmarks and word analysis.

use anyhow::{Context, Result, bail};
use atlas_chain::{
    commands::{
        BenchmarkConfig, PlayOptions, analyze_word, run_benchmark, run_duel, run_play,
    },
    core::Vocabulary,
    game::{MatchConfig, MatchEngine},
    output::{print_analysis_result, print_benchmark_result, print_duel_result},
    strategy::{MinimaxConfig, RandomStrategy, StrategyType},
    wordlists::{self, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "atlas",
    about = "Atlas word-chain game: each word starts with the last letter of the previous one",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Bot strategy: random, longest, trap, minimax (or easy, medium, hard)
    #[arg(short, long, global = true, default_value = "medium")]
    strategy: String,

    /// Wordlist: 'countries' (default), 'continents', 'geography' (both) or path to file
    #[arg(short = 'w', long, global = true, default_value = "countries")]
    wordlist: String,

    /// Seed for random strategies (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Search depth for the minimax strategy, in plies
    #[arg(long, global = true, default_value = "2")]
    depth: u32,

    /// End matches after this many words
    #[arg(long, global = true)]
    max_turns: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game against the bot (default)
    Play {
        /// Pause before each bot move, in milliseconds
        #[arg(long, default_value = "600")]
        think_ms: u64,
    },

    /// One match with a second strategy playing the player's side
    Duel {
        /// Strategy for the player's side
        #[arg(short, long, default_value = "random")]
        challenger: String,

        /// Force the first word
        #[arg(short, long)]
        opening: Option<String>,
    },

    /// Many seeded duels in parallel
    Benchmark {
        /// Strategy for the player's side
        #[arg(short, long, default_value = "random")]
        challenger: String,

        /// Number of games
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },

    /// Show how a word fits the chain
    Analyze {
        /// Word to analyze
        word: String,
    },
}

/// Load the vocabulary selected by the -w flag
///
/// - "countries": embedded country list with common aliases
/// - "continents": the seven continents
/// - "geography": countries and continents together
/// - "<path>": one entry per line (first CSV field), `#` comments allowed
fn load_vocabulary(wordlist: &str) -> Result<Vocabulary> {
    match wordlist {
        "countries" => wordlists::countries().context("embedded country list is invalid"),
        "continents" => wordlists::continents().context("embedded continent list is invalid"),
        "geography" => wordlists::geography().context("embedded word lists overlap"),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            let vocabulary = Vocabulary::load(&words)
                .with_context(|| format!("invalid word list '{path}'"))?;
            if vocabulary.is_empty() {
                bail!("word list '{path}' has no entries");
            }
            Ok(vocabulary)
        }
    }
}

/// Build a strategy by name, rejecting unknown names
fn strategy(name: &str, seed: u64, minimax: MinimaxConfig) -> Result<StrategyType> {
    StrategyType::from_name(name, seed, minimax).with_context(|| {
        format!(
            "unknown strategy '{name}' (expected one of: {})",
            StrategyType::NAMES.join(", ")
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocabulary = load_vocabulary(&cli.wordlist)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    let minimax = MinimaxConfig::default().with_depth(cli.depth);
    let match_config = MatchConfig {
        max_turns: cli.max_turns,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { think_ms: 600 });

    match command {
        Commands::Play { think_ms } => {
            let bot = strategy(&cli.strategy, seed, minimax)?;
            let mut engine = MatchEngine::with_config(&vocabulary, bot, match_config);
            let options = PlayOptions {
                think: Duration::from_millis(think_ms),
            };
            run_play(&mut engine, io::stdin().lock(), io::stdout().lock(), options)?;
        }
        Commands::Duel {
            challenger,
            opening,
        } => {
            let challenger = strategy(&challenger, seed, minimax)?;
            let bot = strategy(&cli.strategy, seed.rotate_left(32), minimax)?;
            let result = run_duel(&vocabulary, challenger, bot, match_config, opening.as_deref())
                .context("opening word was refused")?;
            print_duel_result(&result);
        }
        Commands::Benchmark { challenger, count } => {
            // Validate both names once; the factories below cannot fail after this
            strategy(&challenger, seed, minimax)?;
            strategy(&cli.strategy, seed, minimax)?;

            let factory = |name: String| {
                move |seed: u64| {
                    StrategyType::from_name(&name, seed, minimax)
                        .unwrap_or_else(|| StrategyType::Random(RandomStrategy::new(seed)))
                }
            };

            println!("Running {count} games ({challenger} vs {})...", cli.strategy);
            let config = BenchmarkConfig {
                games: count,
                seed,
                match_config,
                progress: true,
            };
            let result = run_benchmark(
                &vocabulary,
                factory(challenger),
                factory(cli.strategy.clone()),
                &config,
            );
            print_benchmark_result(&result);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&vocabulary, &word)
                .with_context(|| format!("cannot analyze '{word}'"))?;
            print_analysis_result(&result);
        }
    }

    Ok(())
}
