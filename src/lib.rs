//! # Ternary Search Trie
//!
//! An ordered symbol table keyed by strings, built from ternary nodes.
//!
//! Each node stores a single character and three links: keys whose character at
//! the current position sorts lower go `left`, higher go `right`, and keys that
//! share the character continue down the `middle` link one position deeper. This
//! gives trie-style prefix queries without a child slot per alphabet symbol.
//!
//! ## Features
//!
//! - **Ordered**: every enumeration yields keys in ascending character order
//! - **Prefix Queries**: collect every key (or key/value pair) under a prefix
//! - **Incremental Size**: the key count is maintained on insert, never recomputed
//! - **Bulk Loading**: `Extend` and `FromIterator` over `(key, value)` pairs
//!
//! ## Example
//!
//! ```rust
//! use ternary_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.put("she", 0).unwrap();
//! trie.put("shells", 3).unwrap();
//! trie.put("shore", 7).unwrap();
//!
//! assert_eq!(trie.get("shells"), Some(&3));
//! assert_eq!(trie.keys_with_prefix("sh"), vec!["she", "shells", "shore"]);
//! ```
//!
//! The empty string is never a key: lookups report it absent and
//! [`Trie::put`] rejects it with [`Error::InvalidKey`].

mod iter;
mod node;
mod trie;

// Re-export public types
pub use crate::iter::{IntoIter, Iter};
pub use crate::trie::Trie;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key is invalid for the operation (the empty string)
    InvalidKey,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidKey => write!(f, "Invalid key for this operation"),
        }
    }
}

impl std::error::Error for Error {}
