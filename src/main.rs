use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use anvil_solver::report::{render_outcome, render_table};
use anvil_solver::{
    Algorithm, ComboSolver, Direction, OutputFormat, Result, SearchConfig, SearchStatistics,
    Vocabulary,
};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "anvil")]
#[command(about = "anvil - shortest hit combinations for a target work value")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// JSON vocabulary file (defaults to the built-in anvil moves)
    #[arg(long, global = true)]
    vocab: Option<PathBuf>,

    /// Search algorithm to use
    #[arg(long, value_enum, global = true, default_value = "sweep")]
    algorithm: CliAlgorithm,

    /// Largest number of values a single search may explore
    #[arg(long, global = true)]
    max_bound: Option<usize>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: CliFormat,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// CLI algorithm selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAlgorithm {
    /// Single forward pass over the range (reference behavior)
    Sweep,
    /// Breadth-first search, minimal within the bound
    Exact,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(cli: CliAlgorithm) -> Self {
        match cli {
            CliAlgorithm::Sweep => Algorithm::Sweep,
            CliAlgorithm::Exact => Algorithm::Exact,
        }
    }
}

/// CLI output format selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliFormat {
    Text,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(cli: CliFormat) -> Self {
        match cli {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest combination reaching one target
    Solve {
        /// Target work value; negative targets use the mirrored moves
        #[arg(default_value_t = 0, allow_negative_numbers = true)]
        target: i64,
        /// Print search statistics to stderr
        #[arg(long)]
        stats: bool,
    },
    /// Print combinations for every value from 0 up to a maximum
    Table {
        /// Largest value in the table
        #[arg(long)]
        max: u64,
        /// Use the mirrored moves and report targets 0, -1, ..., -max
        #[arg(long)]
        mirrored: bool,
        /// Print search statistics to stderr
        #[arg(long)]
        stats: bool,
    },
    /// Print the active vocabulary as JSON
    Vocab {
        /// Print the mirrored vocabulary instead
        #[arg(long)]
        mirrored: bool,
    },
}

// --- Logging ---

/// Initialize logging to stderr.
///
/// `RUST_LOG` overrides the default filter, which is `warn`, or debug
/// output from the solver with `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,anvil=debug,anvil_solver=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// --- Commands ---

fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading vocabulary");
            Vocabulary::load(path)
        }
        None => Ok(Vocabulary::anvil()),
    }
}

fn print_search_statistics(stats: &SearchStatistics) {
    eprintln!("\nSearch Statistics:");
    for line in stats.format_summary().lines() {
        eprintln!("  {}", line);
    }
}

fn run(args: Args) -> Result<()> {
    let vocabulary = load_vocabulary(args.vocab.as_deref())?;
    let format: OutputFormat = args.format.into();
    let config = SearchConfig::default()
        .with_algorithm(args.algorithm.into())
        .with_max_bound_option(args.max_bound);
    let solver = ComboSolver::new(vocabulary).with_config(config);

    match args.command {
        Commands::Solve { target, stats } => {
            let (outcome, statistics) = solver.solve_with_statistics(target)?;
            println!("{}", render_outcome(&outcome, format)?);
            if stats {
                print_search_statistics(&statistics);
            }
        }
        Commands::Table {
            max,
            mirrored,
            stats,
        } => {
            let direction = if mirrored {
                Direction::Mirrored
            } else {
                Direction::Forward
            };
            let (outcomes, statistics) = solver.solve_all_with_statistics(direction, max)?;
            println!("{}", render_table(&outcomes, format)?);
            if stats {
                print_search_statistics(&statistics);
            }
        }
        Commands::Vocab { mirrored } => {
            let vocabulary = if mirrored {
                solver.vocabulary().mirrored()
            } else {
                solver.vocabulary().clone()
            };
            println!("{}", vocabulary.to_json_pretty()?);
        }
    }

    Ok(())
}

// --- Main Function ---
fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
