//! Command-line interface for automata-report.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **parse**: Turn captured simulator output into a structured report
//! - **ranges**: Parse individual `[start,end)` match range tokens
//!
//! ## Usage
//!
//! ```text
//! # Parse a saved simulator run
//! automata-report parse run.txt
//!
//! # Pipe straight from the simulator
//! automata_sim --pattern ACGT --mode dfa --input reads.txt | automata-report parse - --format json
//!
//! # Attach the automaton structure dump to the JSON report
//! automata-report parse run.txt --automaton dfa.json --format json --pretty
//!
//! # One row per sequence for spreadsheets
//! automata-report parse run.txt.gz --format tsv
//! ```

use clap::{Parser, Subcommand};

pub mod parse;
pub mod ranges;

#[derive(Parser)]
#[command(name = "automata-report")]
#[command(version)]
#[command(about = "Turn automata simulator text output into structured reports")]
#[command(
    long_about = "automata-report reads the text report printed by the automata simulator and converts it into structured data.\n\nIt understands both block styles the simulator emits:\n- Match lists (regex, NFA, DFA, EFA and dot-bracket matching)\n- RNA secondary-structure validation (PDA)\n\nand adds per-sequence coverage plus run-wide statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse captured simulator output
    Parse(parse::ParseArgs),

    /// Parse match range tokens such as [0,3)
    Ranges(ranges::RangesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
