use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::tty::IsTty;
use tracing_subscriber::{EnvFilter, fmt};

use stackmatch::presenter::{render_event, render_listing, render_verdict};
use stackmatch::{LogSink, SeparatorPolicy, TraceEvent, compile_with, verify_with};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to check against, e.g. "a^n c b^n" (prompted for if absent)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Strings to verify (one is prompted for if none are given)
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Print each step of the verification
    #[arg(short, long)]
    trace: bool,

    /// Treat whitespace in the pattern as symbols instead of separators
    #[arg(short, long)]
    literal_separators: bool,

    /// Print the compiled instructions before verifying
    #[arg(short, long)]
    show_instructions: bool,

    /// Never colour the verdict
    #[arg(long)]
    no_color: bool,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("STACKMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("stackmatch: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every input was accepted.
fn run(args: Args) -> Result<bool> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let pattern = match args.pattern {
        Some(p) => p,
        None => prompt(&mut lines, "Enter the pattern (e.g. a^n c b+): ")?,
    };
    let inputs = if args.inputs.is_empty() {
        vec![prompt(&mut lines, "Enter the input (e.g. aaacbbb): ")?]
    } else {
        args.inputs
    };

    let policy = if args.literal_separators {
        SeparatorPolicy::Literal
    } else {
        SeparatorPolicy::Strip
    };
    let instructions = compile_with(&pattern, policy);
    let colour = !args.no_color && io::stdout().is_tty();

    let mut out = io::stdout().lock();
    if args.show_instructions {
        writeln!(out, "{}", render_listing(&instructions))?;
    }

    let mut all_accepted = true;
    for input in &inputs {
        let verdict = if args.trace {
            let mut sink: (Vec<TraceEvent>, LogSink) = (Vec::new(), LogSink);
            let verdict = verify_with(input, &instructions, &mut sink);
            for event in &sink.0 {
                writeln!(out, "{}", render_event(event))?;
            }
            verdict
        } else {
            verify_with(input, &instructions, &mut LogSink)
        };
        writeln!(out, "{}", render_verdict(input, &verdict, colour))?;
        all_accepted &= verdict.is_accepted();
    }
    Ok(all_accepted)
}

/// Print `message` and read one line from stdin.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => line.context("failed to read stdin"),
        None => bail!("stdin closed while waiting for: {}", message.trim_end()),
    }
}
