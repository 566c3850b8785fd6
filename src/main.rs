#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # drawgrade
//!
//! Grades programs that draw a 36-team, four-pot tournament.
//!
//! `drawgrade grade <PATH|CODE>` accepts a `.py` wrapper carrying the C++
//! program, a C++ file, or the C++ source itself, compiles it with `g++`,
//! runs it, and scores the printed draw. `drawgrade check <OUTPUT>` scores
//! output that was captured earlier.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use drawgrade::{DrawMetrics, Evaluator, Input, ReferenceData, config};
use itertools::Itertools;
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Compile, run and grade a submission
    Grade {
        /// Wrapper file, C++ file or C++ source
        input: String,
        /// Print JSON instead of a table
        json:  bool,
    },
    /// Grade previously captured program output
    Check {
        /// File holding the output
        output: PathBuf,
        /// Print JSON instead of a table
        json:   bool,
    },
    /// Print the reference teams
    Teams {
        /// Print JSON instead of a table
        json: bool,
    },
}

/// Parsed command line.
#[derive(Debug, Clone)]
struct Options {
    /// Alternative reference table
    reference: Option<PathBuf>,
    /// Log at debug level
    verbose:   bool,
    /// Command to run
    cmd:       Cmd,
}

/// Parse the command line arguments and return `Options`
fn options() -> Options {
    /// parses the `--json` switch
    fn json() -> impl Parser<bool> {
        long("json")
            .help("Print the result as JSON instead of a table")
            .switch()
    }

    let grade = {
        let input = positional::<String>("PATH/CODE")
            .help("Python wrapper file, C++ file, or C++ source code");
        let json = json();
        construct!(Cmd::Grade { input, json })
    }
    .to_options()
    .command("grade")
    .help("Compile, run and grade a draw program");

    let check = {
        let output = positional::<PathBuf>("OUTPUT").help("File holding the program's output");
        let json = json();
        construct!(Cmd::Check { output, json })
    }
    .to_options()
    .command("check")
    .help("Grade output captured from a draw program");

    let teams = {
        let json = json();
        construct!(Cmd::Teams { json })
    }
    .to_options()
    .command("teams")
    .help("Prints the pots, countries and country caps");

    let reference = long("reference")
        .help("JSON file with an alternative pot and cap table")
        .argument::<PathBuf>("FILE")
        .optional();
    let verbose = short('v')
        .long("verbose")
        .help("Log each evaluation step")
        .switch();
    let cmd = construct!([grade, check, teams]);

    construct!(Options {
        reference,
        verbose,
        cmd
    })
    .to_options()
    .descr("Grader for tournament-draw programs")
    .run()
}

/// Prints a result, either as JSON or as a table with the final score.
fn report(metrics: &DrawMetrics, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(metrics).context("Could not serialize the result")?
        );
        return Ok(());
    }

    eprintln!("{}", metrics.table());

    if !metrics.violations.is_empty() {
        eprintln!(
            "Violations:\n{}",
            metrics
                .violations
                .iter()
                .map(|v| format!("  - {v}"))
                .join("\n")
        );
    }

    let text = format!("{:.4}", metrics.combined_score);
    let score = if metrics.is_error() || metrics.combined_score == 0.0 {
        text.as_str().red()
    } else if metrics.combined_score < 1.0 {
        text.as_str().yellow()
    } else {
        text.as_str().green()
    };
    println!("\nFinal Score: {score}");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let opts = options();

    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(if opts.verbose { Level::DEBUG } else { Level::INFO });
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let reference = match &opts.reference {
        Some(path) => ReferenceData::from_path(path)
            .with_context(|| format!("Failed to load reference data from {}", path.display()))?,
        None => ReferenceData::champions_league(),
    };
    let evaluator = Evaluator::new(Arc::new(reference), config::get().clone());

    match opts.cmd {
        Cmd::Grade { input, json } => {
            let metrics = evaluator.evaluate_input(&Input::classify(&input)).await;
            report(&metrics, json)?;
        }
        Cmd::Check { output, json } => {
            let metrics = match std::fs::read_to_string(&output) {
                Ok(text) => evaluator.evaluate_output(&text),
                Err(e) => DrawMetrics::failed(format!("Could not read {}: {e}", output.display())),
            };
            report(&metrics, json)?;
        }
        Cmd::Teams { json: true } => println!(
            "{}",
            serde_json::to_string_pretty(evaluator.reference())
                .context("Could not serialize the reference data")?
        ),
        Cmd::Teams { json: false } => println!("{}", evaluator.reference().table()),
    };

    Ok(())
}
