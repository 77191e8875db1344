//! OpenRailyard CLI — sort wagon consists through a LIFO shunting yard.
//!
//! Provides the `sort` subcommand that loads a consist from a file (or
//! stdin), routes every wagon to its direction track, and renders the
//! per-direction report as text or JSON. The `check` subcommand
//! validates a consist line by line instead, reporting every rejected
//! token.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use open_railyard_sort::{SortingYard, Wagon};

/// OpenRailyard CLI.
#[derive(Parser)]
#[command(
    name = "open-railyard",
    version,
    about = "OpenRailyard — LIFO shunting-yard sorting tools"
)]
struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load a consist, sort it, and print the per-direction report.
    Sort(SortArgs),
    /// Validate a consist line by line without sorting it.
    Check(CheckArgs),
}

#[derive(Parser)]
struct SortArgs {
    /// Input consist file (reads stdin when omitted).
    file: Option<PathBuf>,
}

#[derive(Parser)]
struct CheckArgs {
    /// Input consist file (reads stdin when omitted).
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Tracing goes to stderr so it never mixes into the report output.
    // Enabled by --verbose or the RUST_LOG env var.
    if cli.verbose || std::env::var("RUST_LOG").is_ok() {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::EnvFilter::from_default_env()
        } else {
            tracing_subscriber::EnvFilter::new("debug")
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match &cli.command {
        Commands::Sort(args) => run_sort(&cli, args),
        Commands::Check(args) => run_check(&cli, args),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };
    std::process::exit(code);
}

/// Read the consist text from a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            Ok(text)
        }
    }
}

// ---------------------------------------------------------------------------
// sort subcommand
// ---------------------------------------------------------------------------

/// Load a consist, run the yard, and render the report.
fn run_sort(cli: &Cli, args: &SortArgs) -> Result<i32, String> {
    let text = read_input(args.file.as_deref())?;

    let mut yard = SortingYard::new();
    let loaded = yard.load(text.lines());
    let routed = yard.sort();
    let report = yard.report();
    info!(loaded, routed, "Consist sorted");

    match cli.format {
        Format::Text => {
            println!("Loaded: {loaded}, routed: {routed}");
            println!("{report}");
        }
        Format::Json => {
            let output = SortOutput {
                loaded,
                routed,
                tracks: report
                    .tracks
                    .iter()
                    .map(|t| TrackOutput {
                        direction: t.direction.tag(),
                        count: t.len(),
                        wagons: t.wagons.iter().map(|w| w.to_string()).collect(),
                    })
                    .collect(),
            };
            print_json(&output)?;
        }
    }

    Ok(0)
}

// ---------------------------------------------------------------------------
// check subcommand
// ---------------------------------------------------------------------------

/// Validate every consist line strictly, reporting rejects.
///
/// Blank lines are skipped, matching what loading would do. Exits
/// non-zero when any line is rejected.
fn run_check(cli: &Cli, args: &CheckArgs) -> Result<i32, String> {
    let text = read_input(args.file.as_deref())?;

    let mut valid = 0usize;
    let mut rejects = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        match Wagon::from_token(token) {
            Ok(_) => valid += 1,
            Err(reason) => rejects.push(Reject {
                line: idx + 1,
                token: token.to_string(),
                reason: reason.to_string(),
            }),
        }
    }
    let rejected = rejects.len();

    match cli.format {
        Format::Text => {
            for reject in &rejects {
                println!("line {}: {}", reject.line, reject.reason);
            }
            println!("{valid} valid, {rejected} rejected");
        }
        Format::Json => {
            let output = CheckOutput {
                status: if rejected == 0 { "success" } else { "rejected" },
                valid,
                rejected,
                rejects,
            };
            print_json(&output)?;
        }
    }

    Ok(if rejected == 0 { 0 } else { 1 })
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

/// Document emitted by `sort --format json`.
#[derive(Serialize)]
struct SortOutput {
    loaded: usize,
    routed: usize,
    tracks: Vec<TrackOutput>,
}

/// One direction's track inside [`SortOutput`].
#[derive(Serialize)]
struct TrackOutput {
    direction: char,
    count: usize,
    wagons: Vec<String>,
}

/// Document emitted by `check --format json`.
#[derive(Serialize)]
struct CheckOutput {
    status: &'static str,
    valid: usize,
    rejected: usize,
    rejects: Vec<Reject>,
}

/// A rejected line inside [`CheckOutput`].
#[derive(Serialize)]
struct Reject {
    line: usize,
    token: String,
    reason: String,
}
