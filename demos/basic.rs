//! Examples of using the ternary search trie
use ternary_trie::{Error, Trie};

fn main() -> Result<(), Error> {
    // Create a new trie
    let mut trie = Trie::new();

    // Insert some values
    trie.put("hello", 1)?;
    trie.put("help", 2)?;
    trie.put("world", 3)?;

    // Check values
    assert_eq!(trie.get("hello"), Some(&1));
    assert_eq!(trie.get("world"), Some(&3));
    assert_eq!(trie.get("missing"), None);

    // Putting an existing key swaps its value and keeps the count
    assert_eq!(trie.put("hello", 10)?, Some(1));
    assert_eq!(trie.size(), 3);

    // Keys come back sorted, either all of them or those under a prefix
    println!("all keys: {:?}", trie.all_keys());
    println!("keys under \"hel\": {:?}", trie.keys_with_prefix("hel"));

    for (key, value) in trie.iter_prefix("hel") {
        println!("  {} → {}", key, value);
    }

    // The empty string is never a key
    assert_eq!(trie.put("", 0), Err(Error::InvalidKey));
    assert!(!trie.contains(""));

    Ok(())
}
