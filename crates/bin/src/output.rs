//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use ordseq::OrderedSequence;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Render a sequence under a label.
///
/// Human output is `label: [a, b, c]`; JSON output is the bare array of
/// values, with the label left out.
pub fn render_sequence(
    label: &str,
    seq: &OrderedSequence,
    format: OutputFormat,
) -> ordseq::Result<String> {
    match format {
        OutputFormat::Human => Ok(format!("{label}: {seq}")),
        OutputFormat::Json => seq.to_json_string(),
    }
}

/// Print a sequence under a label, one line per sequence
pub fn print_sequence(
    label: &str,
    seq: &OrderedSequence,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_sequence(label, seq, format)?);
    Ok(())
}
