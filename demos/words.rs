use prefix_histogram::word_histogram;
use std::env;
use std::fs;

/// Prints the word-prefix histogram of a text file, most frequent first.
///
/// Usage: cargo run --example words <filename>
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];

    let text = fs::read_to_string(filename).unwrap_or_else(|error| {
        eprintln!("Cannot read \"{}\": {}", filename, error);
        std::process::exit(1);
    });

    let entries = word_histogram(&text);

    for entry in &entries {
        let word: String = entry.sequence().into_iter().collect();
        println!("{}: x{}", word, entry.count());
    }

    let total: u64 = entries.iter().map(|entry| entry.count()).sum();
    println!();
    println!("Text is {} characters long.", text.len());
    println!("Total words in histogram: {}", total);
}
