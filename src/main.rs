use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use u_logigrid::enumerate::{CombinationCounter, EnumConfig, EnumResult, EnumRunner};
use u_logigrid::render::TablePrinter;
use u_logigrid::symbols::SymbolTable;
use u_logigrid::{read_puzzle, EnumError, InputError, LoadConfig};

/// Above this many combinations an unbounded run gets a warning.
const LARGE_RUN: u128 = 1_000_000_000;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Enum(#[from] EnumError),
    #[error("write error: {0}")]
    Io(#[from] io::Error),
    #[cfg(not(feature = "parallel"))]
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CliError {
    fn is_broken_pipe(&self) -> bool {
        let io_err = match self {
            CliError::Io(err) | CliError::Enum(EnumError::Output(err)) => err,
            _ => return false,
        };
        io_err.kind() == io::ErrorKind::BrokenPipe
    }
}

/// Reads a symbol table and directives from stdin and prints every
/// combination of per-dimension permutations to stdout.
#[derive(Parser, Debug)]
#[command(name = "logigrid", version, about = "Logic-grid combination enumerator")]
struct Cli {
    /// Print only the number of combinations.
    #[arg(long, default_value_t = false)]
    count: bool,
    /// Stop after this many combinations.
    #[arg(long, value_name = "N")]
    max_combinations: Option<u64>,
    /// Stop after this many milliseconds.
    #[arg(long, value_name = "MS")]
    time_limit_ms: Option<u64>,
    /// Largest accepted search depth (width times dimensions).
    #[arg(long, value_name = "DEPTH", default_value_t = 4096)]
    max_depth: usize,
    /// Reject symbols that appear more than once in the table.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Enumerate top-level branches in parallel (buffers all output).
    #[arg(long, default_value_t = false)]
    parallel: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let load = LoadConfig::default().with_reject_duplicates(cli.strict);
    let mut config = EnumConfig::default().with_max_depth(cli.max_depth);
    if let Some(n) = cli.max_combinations {
        config = config.with_max_combinations(n);
    }
    if let Some(ms) = cli.time_limit_ms {
        config = config.with_time_limit_ms(ms);
    }

    let puzzle = read_puzzle(io::stdin().lock(), &load)?;
    if !puzzle.rules.is_empty() {
        tracing::info!(
            rules = puzzle.rules.len(),
            "directives parsed; they do not restrict the enumeration"
        );
    }
    warn_if_large(&puzzle.symbols, &config);

    let mut out = BufWriter::new(io::stdout().lock());
    let result = if cli.count {
        let result = count(&puzzle.symbols, &config, cli.parallel)?;
        writeln!(out, "{}", result.combinations)?;
        result
    } else {
        print(&puzzle.symbols, &config, cli.parallel, &mut out)?
    };
    out.flush()?;

    tracing::debug!(
        combinations = result.combinations,
        elapsed_ms = result.elapsed_ms,
        "run finished"
    );
    Ok(())
}

fn warn_if_large(table: &SymbolTable, config: &EnumConfig) {
    if config.max_combinations.is_some() || config.time_limit_ms.is_some() {
        return;
    }
    match table.combination_count() {
        Some(n) if n <= LARGE_RUN => {}
        Some(n) => tracing::warn!(combinations = %n, "unbounded run over a very large search space"),
        None => tracing::warn!("unbounded run; combination count exceeds u128"),
    }
}

fn count(
    table: &SymbolTable,
    config: &EnumConfig,
    parallel: bool,
) -> Result<EnumResult, CliError> {
    if parallel {
        return count_parallel(table, config);
    }
    let mut counter = CombinationCounter::default();
    Ok(EnumRunner::run(
        table.width(),
        table.dimensions(),
        config,
        &mut counter,
    )?)
}

fn print<W: Write>(
    table: &SymbolTable,
    config: &EnumConfig,
    parallel: bool,
    out: &mut W,
) -> Result<EnumResult, CliError> {
    if parallel {
        return print_parallel(table, config, out);
    }
    let mut printer = TablePrinter::new(table, &mut *out);
    let result = EnumRunner::run(table.width(), table.dimensions(), config, &mut printer)?;
    printer.finish()?;
    Ok(result)
}

#[cfg(feature = "parallel")]
fn count_parallel(table: &SymbolTable, config: &EnumConfig) -> Result<EnumResult, CliError> {
    let (_, result) = EnumRunner::run_parallel(
        table.width(),
        table.dimensions(),
        config,
        None,
        |_| CombinationCounter::default(),
    )?;
    Ok(result)
}

#[cfg(feature = "parallel")]
fn print_parallel<W: Write>(
    table: &SymbolTable,
    config: &EnumConfig,
    out: &mut W,
) -> Result<EnumResult, CliError> {
    let (printers, result) = EnumRunner::run_parallel(
        table.width(),
        table.dimensions(),
        config,
        None,
        |_| TablePrinter::new(table, Vec::new()),
    )?;
    for printer in printers {
        out.write_all(&printer.finish()?)?;
    }
    Ok(result)
}

#[cfg(not(feature = "parallel"))]
fn count_parallel(_table: &SymbolTable, _config: &EnumConfig) -> Result<EnumResult, CliError> {
    Err(parallel_unavailable())
}

#[cfg(not(feature = "parallel"))]
fn print_parallel<W: Write>(
    _table: &SymbolTable,
    _config: &EnumConfig,
    _out: &mut W,
) -> Result<EnumResult, CliError> {
    Err(parallel_unavailable())
}

#[cfg(not(feature = "parallel"))]
fn parallel_unavailable() -> CliError {
    CliError::InvalidConfig("--parallel requires a build with the `parallel` feature".to_string())
}
