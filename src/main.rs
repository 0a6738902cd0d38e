use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::debug;

use gauss::prelude::*;

#[derive(Parser)]
#[command(
    name = "gauss",
    version = env!("CARGO_PKG_VERSION"),
    about = "Solve a linear system by Gauss-Jordan elimination, step by step",
    after_help = r#"
Each ROW is one equation: its coefficients followed by the constant, separated
by commas or whitespace. Exact mode accepts integers, decimals and p/q
fractions; float mode rejects fractions. Rows may start with a negative entry;
put options before the rows.

Examples:
  gauss "2, 1, 5" "1, -1, 1"      # 2x + y = 5, x - y = 1
  gauss --float "1 2 3" "4 5 6"   # Same engine, f64 arithmetic
  gauss --example                 # Built-in 4x5 sample system

Environment Variables:
  RUST_LOG=debug                  Set log level when --log-level is not given
"#
)]
struct Cli {
    /// Use floating-point arithmetic instead of exact rationals
    #[arg(long)]
    float: bool,

    /// Solve the built-in sample system
    #[arg(long, conflicts_with = "rows")]
    example: bool,

    /// Print only the result and verification, not the step trace
    #[arg(short, long)]
    quiet: bool,

    /// Print step descriptions without matrices
    #[arg(long)]
    no_matrices: bool,

    /// Set log level (overrides RUST_LOG)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Matrix rows; a leading minus sign is read as part of the entry
    #[arg(value_name = "ROW", allow_hyphen_values = true)]
    rows: Vec<String>,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level.clone() {
        logger.filter_level(level.into());
    }
    logger.init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.float {
        solve_and_print::<Real>(cli)
    } else {
        solve_and_print::<Rational>(cli)
    }
}

fn solve_and_print<S: Scalar>(cli: &Cli) -> Result<()> {
    let system: Matrix<S> = if cli.example {
        sample_system().context("building the sample system")?
    } else if cli.rows.is_empty() {
        bail!("no matrix given: pass one ROW per equation, or --example");
    } else {
        parse_matrix(cli.rows.as_slice()).context("reading the matrix")?
    };
    debug!(
        "{} equations in {} unknowns, {}",
        system.num_rows(),
        system.num_vars(),
        S::MODE
    );

    let outcome = solve(&system).context("reducing the matrix")?;

    let config = if cli.quiet {
        FormatConfig::summary()
    } else {
        FormatConfig::default().with_matrices(!cli.no_matrices)
    };
    print!("{}", outcome.render_with(&config));
    Ok(())
}
