//! PQCP Pair Checker (command-line entry point)
//!
//! Verifies that the summed periodic autocorrelation of a ±1 sequence
//! pair stays within the quasi-complementary bound of 4 at every nonzero
//! cyclic shift, and prints a full sidelobe report.
//!
//! Run with no arguments to check the built-in reference pair, or pass
//! two `{+, -}` symbol strings to check a pair of your own:
//!
//! ```text
//! pqcpcheck
//! pqcpcheck '++-+' '+++-'
//! pqcpcheck --json '++-+' '+++-'
//! ```
//!
//! Exit status: 0 when the bound holds, 1 when it is violated, 2 on
//! malformed input.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use pqcp_core::report::{render_json, render_text};
use pqcp_core::{analyze_pair, AnalyzerConfig, BinarySequence};

/// Reference pair of length 44 whose summed PACF peaks at exactly 4.
const REFERENCE_A: &str = "+-++--++++---++-+---+-++++--+--+++-+++--+++-";
const REFERENCE_B: &str = "-++-++-+++--+-+-+++++-+---+-----+-++-+++++--";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    let mut json = false;
    let mut sequences = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            sequences.push(arg);
        }
    }

    let (raw_a, raw_b) = match sequences.len() {
        0 => (REFERENCE_A.to_string(), REFERENCE_B.to_string()),
        2 => {
            let mut it = sequences.into_iter();
            (it.next().unwrap(), it.next().unwrap())
        }
        _ => {
            eprintln!("usage: pqcpcheck [--json] [SEQ_A SEQ_B]");
            return ExitCode::from(2);
        }
    };

    match run(&raw_a, &raw_b, json) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(2)
        }
    }
}

fn run(raw_a: &str, raw_b: &str, json: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let a = BinarySequence::parse(raw_a)?;
    let b = BinarySequence::parse(raw_b)?;
    let config = AnalyzerConfig::default();
    tracing::debug!(
        "analyzing length-{} pair against bound {}",
        a.len(),
        config.threshold
    );

    let verdict = analyze_pair(&a, &b, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", render_json(&verdict)?)?;
    } else {
        render_text(&verdict, &mut out)?;
    }
    Ok(verdict.passed)
}
