//! Demo command - runs the canonical integer and fruit examples.

use ordseq::OrderedSequence;

use crate::output::{OutputFormat, print_sequence};

/// Run the demo command
pub fn run(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut numbers = OrderedSequence::new();
    numbers.insert(33)?;
    numbers.insert(7)?;
    numbers.insert(15)?;
    numbers.insert(3)?;
    // Duplicates are allowed
    numbers.insert(33)?;
    print_sequence("Numbers", &numbers, format)?;

    let mut fruits = OrderedSequence::new();
    fruits.insert_many(["watermelon", "banana", "apple", "kiwi", "cherry", "banana"])?;
    print_sequence("Fruits", &fruits, format)?;

    Ok(())
}
