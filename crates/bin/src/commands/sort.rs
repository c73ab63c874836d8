//! Sort command - inserts user-supplied values and prints the result.

use ordseq::{OrderedSequence, Value};

use crate::cli::SortArgs;
use crate::output::{OutputFormat, print_sequence};

/// Integers become `Value::Int`, everything else `Value::Text`
fn parse_value(raw: &str) -> Value {
    match raw.parse::<i64>() {
        Ok(n) => Value::Int(n),
        Err(_) => Value::from(raw),
    }
}

/// Run the sort command
pub fn run(args: &SortArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut seq = OrderedSequence::new();
    seq.insert_many(args.values.iter().map(|raw| parse_value(raw)))?;
    tracing::debug!(len = seq.len(), mode = %seq.mode(), "Sorted input values");

    print_sequence("Sorted", &seq, format)
}
