use clap::Args;

use crate::cli::OutputFormat;
use crate::core::range::{parse_range, Range};

#[derive(Args)]
pub struct RangesArgs {
    /// Range tokens, e.g. '[0,3)'
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

/// Execute ranges subcommand
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RangesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let ranges: Vec<Range> = args.tokens.iter().map(|t| parse_range(t)).collect();

    if verbose {
        let unreadable = ranges.iter().filter(|r| r.is_empty()).count();
        eprintln!("Parsed {} token(s), {unreadable} empty or unreadable", ranges.len());
    }

    match format {
        OutputFormat::Text => {
            for range in &ranges {
                println!(
                    "{}: start={} end={} length={}",
                    range.raw_text, range.start, range.end, range.length
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranges)?),
        OutputFormat::Tsv => {
            println!("range\tstart\tend\tlength");
            for range in &ranges {
                println!(
                    "{}\t{}\t{}\t{}",
                    range.raw_text, range.start, range.end, range.length
                );
            }
        }
    }

    Ok(())
}
