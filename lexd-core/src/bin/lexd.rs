//! `lexd` CLI: lexical diversity score of a text.
//!
//! ```bash
//! # Score a file
//! lexd essay.txt
//!
//! # Score stdin, showing each estimator
//! curl -s https://example.com/page.html | lexd --report
//!
//! # Inspect what the estimators see
//! lexd essay.txt --tokens
//! ```
//!
//! A numeric score goes to stdout with exit code 0. Any other outcome is
//! printed to stderr as `error: <reason>` with exit code 1. Unreadable
//! input or rejected parameters exit with 2.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use lexd_core::{normalize, respond, DiversityConfig, Scorer};
use lexd_types::{DEFAULT_MIN_TOKENS, DEFAULT_SAMPLE_SIZE, DEFAULT_TTR_THRESHOLD};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lexd", version, about = "Lexical diversity (MTLD, HD-D, Yule's I) of a text")]
struct Cli {
    /// Text file to score. Reads stdin when omitted or `-`.
    path: Option<PathBuf>,

    /// MTLD type-token ratio threshold.
    #[arg(long, default_value_t = DEFAULT_TTR_THRESHOLD)]
    ttr_threshold: f64,

    /// HD-D sample size.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: f64,

    /// Minimum number of tokens required.
    #[arg(long, default_value_t = DEFAULT_MIN_TOKENS)]
    min_tokens: usize,

    /// Print each estimator's value before the composite.
    #[arg(long)]
    report: bool,

    /// Print the normalized tokens, one per line, and exit.
    #[arg(long, conflicts_with = "report")]
    tokens: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("lexd: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let text = read_input(cli.path.as_deref())?;
    info!(bytes = text.len(), "input loaded");

    if cli.tokens {
        for token in normalize(&text) {
            println!("{}", token);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let scorer = Scorer::new(DiversityConfig {
        ttr_threshold: cli.ttr_threshold,
        sample_size: cli.sample_size,
        min_tokens: cli.min_tokens,
    })
    .context("rejected scoring parameters")?;

    if cli.report {
        if let Ok(report) = scorer.report(&normalize(&text)) {
            println!("{}", report);
        }
    }

    let response = respond(&text, &scorer);
    if response.is_success() {
        println!("{}", response.body);
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("error: {}", response.body);
        Ok(ExitCode::FAILURE)
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}
