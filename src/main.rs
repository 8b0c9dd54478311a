// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end.
//!
//! Parses the arguments into a validated [`RunConfig`], executes the
//! selected strategies, and prints either a per-strategy report (digits
//! with repeat windows highlighted, then the repeat listing) or, with
//! `--format`, a single rendered template line and nothing else.
//!
//! Configuration errors print `error: <message>` to stderr and exit
//! with code 1; clap reports malformed flags itself.

use std::process;

use clap::Parser;
use colored::Colorize;

use efdr::{ConfigError, LengthSpec, Mode, RunConfig, SequenceRun, Strategy};

/// Evolving Fibonacci digital-root sequences with repeat detection.
#[derive(Parser, Debug)]
#[command(name = "efdr", version, about)]
struct Cli {
    /// How many digits to generate: a count like 120, or an offset from
    /// the base like +30 or -2
    #[arg(default_value = "150", allow_hyphen_values = true)]
    length: LengthSpec,

    /// Detection strategy: local, global, or both
    #[arg(short, long, default_value_t = Mode::Local)]
    mode: Mode,

    /// Numeric base (at least 2)
    #[arg(short, long, default_value_t = 10)]
    base: u32,

    /// Suppress the digit listing; headers and repeats still print
    #[arg(short, long)]
    quiet: bool,

    /// Render this template instead of the report; see the render module
    /// for the @@ token codes
    #[arg(short, long)]
    format: Option<String>,

    /// Also report the digit N positions from the sequence end
    #[arg(long, value_name = "N")]
    from_last: Option<usize>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = execute(&cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn execute(cli: &Cli) -> Result<(), ConfigError> {
    let config = RunConfig::new(cli.mode, cli.base, cli.length)?;
    let runs = efdr::run(&config);

    if let Some(format) = &cli.format {
        println!("{}", efdr::render(format, &config, &runs));
        return Ok(());
    }

    for &strategy in config.mode.strategies() {
        print_report(strategy, runs.run(strategy), &config, cli);
    }
    Ok(())
}

fn print_report(strategy: Strategy, run: &SequenceRun, config: &RunConfig, cli: &Cli) {
    println!(
        "\n{} | Base {} | {} digits\n",
        strategy.label(),
        config.base,
        config.length
    );

    if !cli.quiet {
        println!("{}", painted_digits(run));
    }

    if let Some(n) = cli.from_last.filter(|&n| n > 0) {
        println!("{}", from_last_line(run, n));
    }

    println!("\nRepeats:");
    for event in &run.repeat_events {
        println!(
            "  {} at position {}, now using {} terms",
            event.pattern, event.position, event.new_term_count
        );
    }
}

/// Digits comma-joined, with members of detected repeat windows in cyan.
/// The colored crate drops the escape codes when stdout is not a terminal.
fn painted_digits(run: &SequenceRun) -> String {
    run.sequence
        .iter()
        .enumerate()
        .map(|(index, digit)| {
            if run.repeat_positions.contains(&index) {
                digit.to_string().cyan().to_string()
            } else {
                digit.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn from_last_line(run: &SequenceRun, n: usize) -> String {
    match (run.index_from_last(n), run.digit_from_last(n)) {
        (Some(index), Some(digit)) => {
            format!("Digit at position {index} ({n} from last): {digit}")
        }
        _ => format!("Digit {n} from last: no such element"),
    }
}
