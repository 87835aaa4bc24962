use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{debug, info, warn};

use crate::cli::OutputFormat;
use crate::core::record::{SequenceBody, SequenceRecord};
use crate::core::report::Report;
use crate::parsing::input::{read_automaton_dump, read_report_file};
use crate::parsing::report::parse_report;

#[derive(Args)]
pub struct ParseArgs {
    /// Captured simulator output (plain, .gz or .bgz)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// JSON automaton structure dump to attach as "automaton" (JSON output only)
    #[arg(long)]
    pub automaton: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Execute parse subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be serialized.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ParseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_report_file(&args.input)?;
    debug!("Read {} bytes from {}", text.len(), args.input.display());

    let report = parse_report(&text);
    info!(
        "Parsed {} sequence(s), mode {}",
        report.stats.total_sequences,
        report.mode()
    );

    if verbose && report.stats.total_sequences == 0 {
        eprintln!("Warning: no sequence blocks found in input.");
    }

    match format {
        OutputFormat::Text => print_text_report(&report, verbose),
        OutputFormat::Json => {
            let automaton = args.automaton.as_deref().and_then(load_automaton);
            print_json_report(&report, automaton, args.pretty)?;
        }
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

/// Load an automaton dump, degrading to `None` with a warning
fn load_automaton(path: &Path) -> Option<serde_json::Value> {
    match read_automaton_dump(path) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to read automaton dump file {}: {}", path.display(), e);
            None
        }
    }
}

/// Serialize a report, adding the automaton dump as a sibling `automaton` key
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn report_to_json(
    report: &Report,
    automaton: Option<serde_json::Value>,
) -> serde_json::Result<serde_json::Value> {
    let mut value = serde_json::to_value(report)?;
    if let (Some(automaton), Some(object)) = (automaton, value.as_object_mut()) {
        object.insert("automaton".to_string(), automaton);
    }
    Ok(value)
}

fn print_json_report(
    report: &Report,
    automaton: Option<serde_json::Value>,
    pretty: bool,
) -> anyhow::Result<()> {
    let output = report_to_json(report, automaton)?;
    if pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string(&output)?);
    }
    Ok(())
}

fn print_text_report(report: &Report, verbose: bool) {
    let header = &report.header;

    println!("Simulation Report");
    println!("{}", "=".repeat(60));
    println!("\nPattern: {}", header.pattern);
    println!(
        "Datasets: {} ({} sequence(s))",
        header.dataset_descriptor, header.dataset_count
    );
    println!("Automaton mode: {}", report.mode());

    println!("\nSequences:");
    for record in &report.sequences {
        print_text_record(record, verbose);
    }

    let summary = report.summary();
    println!("\nRun Summary:");
    println!("  Runs: {}", summary.runs);
    println!("  Matches: {}", summary.total_matches);
    println!("  All accepted: {}", if summary.all_accepted { "yes" } else { "no" });

    println!("\nStatistics:");
    println!("  Sequences: {}", report.stats.total_sequences);
    println!("  With matches: {}", report.stats.sequences_with_matches);
    println!("  States visited: {}", report.stats.total_states_visited);
    println!(
        "  Average coverage: {:.1}%",
        report.stats.average_coverage * 100.0
    );
}

fn print_text_record(record: &SequenceRecord, verbose: bool) {
    println!(
        "  #{} (len={}): {} match(es), {:.1}% covered",
        record.sequence_number,
        record.length,
        record.stats.match_count,
        record.stats.coverage * 100.0
    );

    if !verbose {
        return;
    }

    match &record.body {
        SequenceBody::MatchList(body) => {
            let ranges: Vec<String> = body.match_ranges.iter().map(ToString::to_string).collect();
            println!("      Text: {}", body.sequence_text);
            println!("      Ranges: {}", ranges.join(" "));
            match body.max_stack_depth {
                Some(depth) => println!(
                    "      States visited: {} (max stack depth {depth})",
                    body.states_visited
                ),
                None => println!("      States visited: {}", body.states_visited),
            }
        }
        SequenceBody::Validation(body) => {
            println!("      RNA: {}", body.rna_sequence.as_deref().unwrap_or("-"));
            println!("      Structure: {}", body.dot_bracket.as_deref().unwrap_or("-"));
            if let Some(valid) = body.valid_bases {
                println!("      Valid bases: {}", if valid { "yes" } else { "no" });
            }
            for check in &body.checks {
                println!("      - {check}");
            }
            for message in &body.auxiliary_messages {
                println!("      ! {message}");
            }
            if let Some(result) = body.validation_result {
                println!("      Result: {result}");
            }
        }
    }
}

fn print_tsv_report(report: &Report) {
    println!(
        "sequence_number\tlength\tgrammar\tmatch_count\tcoverage\tstates_visited\tresult\tsequence_text"
    );
    for record in &report.sequences {
        let (grammar, result) = match &record.body {
            SequenceBody::MatchList(_) => ("match_list", String::new()),
            SequenceBody::Validation(body) => (
                "validation",
                body.validation_result
                    .map(|r| r.to_string())
                    .unwrap_or_default(),
            ),
        };
        println!(
            "{}\t{}\t{}\t{}\t{:.4}\t{}\t{}\t{}",
            record.sequence_number,
            record.length,
            grammar,
            record.stats.match_count,
            record.stats.coverage,
            record.states_visited(),
            result,
            record.sequence_text(),
        );
    }
}
