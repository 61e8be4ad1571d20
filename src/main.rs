//! Helple - CLI
//!
//! Suggests Wordle-style guesses from feedback, plays against known targets
//! and benchmarks the strategies.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use helple::{
    commands::{SolveConfig, parse_rows, run_benchmark, run_play, solve_word, suggest},
    dictionary::InMemoryDictionary,
    output::{print_benchmark_result, print_solve_result, print_suggestion},
    solver::{EngineConfig, RandomStrategy, Solver, StrategyKind},
    wordlists::{self, loader::load_from_file},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "helple",
    about = "Guess advisor for Wordle-style games using minimax and entropy search",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: entropy (default), minimax, first, random
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Word list file, one word per line (default: bundled list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Word length for play, suggest and benchmark
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Seed for hint sampling and the random strategy
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Let the strategy choose the first guess instead of the opening word
    #[arg(long, global = true)]
    no_opening: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: enter the feedback for each suggestion (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest the next guess from feedback rows such as `salet=-YY-G`
    Suggest {
        /// Rows in play order, `word=pattern` with G/Y/- per letter
        rows: Vec<String>,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of dictionary words to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    let strategy = build_strategy(&cli.strategy, cli.seed)?;
    let config = build_config(&cli);
    log::debug!("strategy {strategy}, seed {}", config.seed);

    let solver = Solver::with_config(strategy, &dictionary, config);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            ensure_length(&dictionary, cli.length)?;
            let bar = turn_progress_bar()?;
            let progress = |fraction: f32| report(&bar, fraction);
            run_play(
                &solver,
                cli.length,
                &progress,
                &mut io::stdin().lock(),
                &mut io::stdout(),
            )
        }
        Commands::Solve { word, verbose } => {
            let bar = turn_progress_bar()?;
            let progress = |fraction: f32| report(&bar, fraction);
            let config = SolveConfig::new(word, solver.config().max_attempts);
            let result = solve_word(config, &solver, &progress)?;
            bar.finish_and_clear();
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Suggest { rows } => {
            ensure_length(&dictionary, cli.length)?;
            let session = parse_rows(cli.length, &rows)?;
            let bar = turn_progress_bar()?;
            let progress = |fraction: f32| report(&bar, fraction);
            let suggestion = suggest(&solver, &session, &progress)?;
            bar.finish_and_clear();
            print_suggestion(&session, &suggestion);
            Ok(())
        }
        Commands::Benchmark { count } => {
            ensure_length(&dictionary, cli.length)?;
            run_benchmark_command(&solver, &dictionary, cli.length, count)
        }
    }
}

fn load_dictionary(path: Option<&Path>) -> Result<InMemoryDictionary> {
    match path {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            Ok(InMemoryDictionary::new(words))
        }
        None => Ok(wordlists::bundled()),
    }
}

fn build_strategy(name: &str, seed: Option<u64>) -> Result<StrategyKind> {
    let strategy = StrategyKind::from_name(name).ok_or_else(|| {
        anyhow!(
            "unknown strategy {name:?}, expected one of: {}",
            StrategyKind::NAMES.join(", ")
        )
    })?;
    Ok(match (strategy, seed) {
        (StrategyKind::RandomValid(_), Some(seed)) => {
            StrategyKind::RandomValid(RandomStrategy::seeded(seed))
        }
        (strategy, _) => strategy,
    })
}

fn build_config(cli: &Cli) -> EngineConfig {
    let mut config = EngineConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.no_opening {
        config = config.without_opening_words();
    }
    config
}

fn ensure_length(dictionary: &InMemoryDictionary, length: usize) -> Result<()> {
    if dictionary.words(length).is_empty() {
        let lengths: Vec<String> = dictionary.lengths().iter().map(ToString::to_string).collect();
        bail!(
            "no {length}-letter words in the word list (available lengths: {})",
            lengths.join(", ")
        );
    }
    Ok(())
}

fn run_benchmark_command(
    solver: &Solver<'_, InMemoryDictionary>,
    dictionary: &InMemoryDictionary,
    length: usize,
    count: usize,
) -> Result<()> {
    let targets: Vec<_> = dictionary.words(length).iter().take(count).cloned().collect();
    println!(
        "Running benchmark on {} words with the {} strategy...",
        targets.len(),
        solver.strategy()
    );

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let result = run_benchmark(solver, &targets, |word, guesses| {
        pb.inc(1);
        match guesses {
            Some(n) => pb.set_message(format!("{word}: {n}")),
            None => pb.set_message(format!("{word}: failed")),
        }
    })?;
    pb.finish_and_clear();

    print_benchmark_result(&result, solver.config().max_attempts);
    Ok(())
}

/// Bar for one turn's candidate scoring, drawn only while a turn is running
fn turn_progress_bar() -> Result<ProgressBar> {
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} scoring [{bar:40.cyan/blue}] {percent}%")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

fn report(bar: &ProgressBar, fraction: f32) {
    if fraction >= 1.0 {
        bar.finish_and_clear();
    } else {
        if bar.is_finished() {
            bar.reset();
        }
        // Truncation intended: fraction is within [0, 1)
        bar.set_position((fraction * 100.0) as u64);
    }
}
