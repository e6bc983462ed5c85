//! Loads `word count` pairs from stdin into a trie and reports on them.
//!
//! ```text
//! cargo run --example word_frequency -- [LOOKUP] [PREFIX] < counts.txt
//! ```
//!
//! `LOOKUP` defaults to `ALGORITHM` and `PREFIX` to `TEST`. Set `RUST_LOG=trace`
//! to watch every new key go in.
use std::env;
use std::io::{self, Read};

use anyhow::{bail, Context};
use ternary_trie::Trie;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let lookup = args.next().unwrap_or_else(|| "ALGORITHM".to_string());
    let prefix = args.next().unwrap_or_else(|| "TEST".to_string());

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mut trie = Trie::<u64>::new();
    let mut tokens = input.split_whitespace();
    while let Some(word) = tokens.next() {
        let count = match tokens.next() {
            Some(count) => count,
            None => bail!("word {:?} has no count", word),
        };
        let count: u64 = count
            .parse()
            .with_context(|| format!("bad count {:?} for word {:?}", count, word))?;
        trie.put(word, count)?;
    }
    info!(keys = trie.size(), "loaded word counts");

    println!("Total number of words in file = {}", trie.size());
    match trie.get(&lookup) {
        Some(count) => println!("Frequency of word '{}' is {}", lookup, count),
        None => println!("Word '{}' is not in the file", lookup),
    }
    println!("Is 'EMOJI' present in the text file? {}", trie.contains("EMOJI"));
    println!(
        "Found {} keys with prefix '{}'",
        trie.keys_with_prefix(&prefix).len(),
        prefix
    );

    Ok(())
}
