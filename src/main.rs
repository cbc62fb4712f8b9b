//! Letterbox Solver - CLI
//!
//! Letter Boxed solver with TUI and CLI modes over a bit-packed dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letterbox_solver::{
    commands::{
        analyze_dictionary, parse_puzzle_args, preprocess, random_puzzles, read_puzzle_file,
        run_batch, run_benchmark, run_simple, solve_puzzle,
    },
    config::{DEFAULT_WORDS_PATH, DictionaryArgs},
    dictionary::Dictionary,
    engine::Engine,
    log::init_logger,
    output::{
        print_analysis_result, print_batch_statistics, print_benchmark_result,
        print_preprocess_result, print_solve_result,
    },
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "letterbox_solver",
    about = "Letter Boxed solver: every two-word solution, shortest first",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// Log dictionary loading and solving details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (puzzle prompt without TUI)
    Simple,

    /// Solve one puzzle
    Solve {
        /// Four sides, e.g. `btn akd oes mir`, or one quoted string
        #[arg(required = true, num_args = 1..=4)]
        sides: Vec<String>,

        /// Number of solutions to print
        #[arg(short = 'n', long, default_value = "25")]
        top: usize,

        /// Print every solution
        #[arg(short, long, conflicts_with = "top")]
        all: bool,

        /// Show word counts and timings
        #[arg(short, long)]
        timing: bool,
    },

    /// Build a `.pre` cache from a text word list
    Preprocess {
        /// Cache file to write (default: next to the word list)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Per-letter dictionary statistics, optionally judging one word
    Analyze {
        /// Word to classify
        word: Option<String>,

        /// Restrict to the words playable in this puzzle
        #[arg(short, long)]
        puzzle: Option<String>,
    },

    /// Solve random puzzles and report throughput
    Benchmark {
        /// Number of random puzzles
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for reproducible puzzles
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Solve every puzzle in a file, one per line
    Batch {
        /// Puzzle file
        file: PathBuf,

        /// Solutions to print per puzzle
        #[arg(short = 'n', long, default_value = "3")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let args = &cli.dictionary;

    match command {
        Commands::Play => with_dictionary(args, run_play_command),
        Commands::Simple => {
            with_dictionary(args, |dict| run_simple(dict).map_err(|e| anyhow::anyhow!(e)))
        }
        Commands::Solve {
            sides,
            top,
            all,
            timing,
        } => {
            let limit = if all { usize::MAX } else { top };
            with_dictionary(args, |dict| run_solve_command(dict, &sides, limit, timing))
        }
        Commands::Preprocess { output } => run_preprocess_command(args, output),
        Commands::Analyze { word, puzzle } => with_dictionary(args, |dict| {
            run_analyze_command(dict, word.as_deref(), puzzle.as_deref())
        }),
        Commands::Benchmark { count, seed } => with_dictionary(args, |dict| {
            run_benchmark_command(dict, count, seed);
            Ok(())
        }),
        Commands::Batch { file, top } => {
            with_dictionary(args, |dict| run_batch_command(dict, &file, top))
        }
    }
}

/// Set up the engine from the dictionary options and run `f` against it
fn with_dictionary(args: &DictionaryArgs, f: impl FnOnce(&Dictionary) -> Result<()>) -> Result<()> {
    let engine = load_engine(args)?;
    f(engine.dictionary()?)
}

fn load_engine(args: &DictionaryArgs) -> Result<Engine> {
    let config = args.to_config();
    let mut engine = Engine::new();
    let context = match &config.words_path {
        Some(path) => format!("Failed to load dictionary {}", path.display()),
        None => "Failed to load dictionary".to_string(),
    };
    engine.setup(&config).context(context)?;
    Ok(engine)
}

fn run_solve_command(
    dictionary: &Dictionary,
    sides: &[String],
    limit: usize,
    timing: bool,
) -> Result<()> {
    let (sides, labels) = parse_puzzle_args(sides).map_err(|e| anyhow::anyhow!(e))?;
    let result = solve_puzzle(dictionary, &sides, labels).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, limit, timing);
    Ok(())
}

fn run_analyze_command(
    dictionary: &Dictionary,
    word: Option<&str>,
    puzzle: Option<&str>,
) -> Result<()> {
    let sides = puzzle
        .map(|puzzle| parse_puzzle_args(&[puzzle.to_string()]))
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?
        .map(|(sides, _)| sides);

    let result = analyze_dictionary(dictionary, word, sides.as_ref());
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(dictionary: &Dictionary, count: usize, seed: Option<u64>) {
    match seed {
        Some(seed) => println!("Running benchmark on {count} random puzzles (seed {seed})..."),
        None => println!("Running benchmark on {count} random puzzles..."),
    }

    let puzzles = random_puzzles(count, seed);
    let result = run_benchmark(dictionary, &puzzles, true);
    print_benchmark_result(&result);
}

fn run_batch_command(dictionary: &Dictionary, file: &Path, top: usize) -> Result<()> {
    let puzzles = read_puzzle_file(file).map_err(|e| anyhow::anyhow!(e))?;
    println!(
        "Solving {} puzzles from {}...",
        puzzles.len(),
        file.display()
    );

    let stats = run_batch(dictionary, &puzzles, true);
    print_batch_statistics(&stats, top);
    Ok(())
}

fn run_preprocess_command(args: &DictionaryArgs, output: Option<PathBuf>) -> Result<()> {
    if args.sample {
        anyhow::bail!("preprocess needs a word list file, not --sample");
    }

    let config = args.to_config();
    let words_path = config
        .words_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_PATH));
    let output_path = output
        .or_else(|| config.cache_path())
        .context("Cannot derive a cache path from the word list")?;

    let result = preprocess(&words_path, &output_path)
        .with_context(|| format!("Failed to preprocess {}", words_path.display()))?;
    print_preprocess_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary) -> Result<()> {
    use letterbox_solver::interactive::{App, run_tui};

    let app = App::new(dictionary);
    run_tui(app)
}
