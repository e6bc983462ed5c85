//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the ternary search trie.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::{debug, trace, warn};

use crate::iter::{collect_keys, IntoIter, Iter};
use crate::node::TrieNode;
use crate::Error;

/// An ordered symbol table from strings to values, stored as a ternary search trie.
///
/// Each node holds one character. A lookup walks down from the root, moving
/// `left` or `right` while the current character of the key differs from the
/// node's character, and down the `middle` link to the next character when it
/// matches. Keys come back out of every enumeration in ascending order.
///
/// Characters are compared by their ordinal value, so the order is the same as
/// the `Ord` implementation of `str`.
///
/// The empty string is never a key. [`get`](Trie::get) and
/// [`contains`](Trie::contains) report it absent, and [`put`](Trie::put) rejects
/// it with [`Error::InvalidKey`] without touching the trie.
#[derive(Clone)]
pub struct Trie<V> {
    /// The root node of the trie, absent while the trie is empty
    pub(crate) root: Option<Box<TrieNode<V>>>,

    /// The number of values stored in the trie
    size: usize,
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_trie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie { root: None, size: 0 }
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.size(), 0);
    ///
    /// trie.put("hello", 42).unwrap();
    /// assert_eq!(trie.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of keys stored in the trie. Same as [`size`](Trie::size).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("hello", 42).unwrap();
    ///
    /// assert_eq!(trie.get("hello"), Some(&42));
    /// assert_eq!(trie.get("hell"), None);
    /// assert_eq!(trie.get(""), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        self.find_node(key).and_then(|node| node.value.as_ref())
    }

    /// Retrieves a mutable reference to the value stored for the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("ALGORITHM", 1).unwrap();
    ///
    /// if let Some(count) = trie.get_mut("ALGORITHM") {
    ///     *count += 1;
    /// }
    /// assert_eq!(trie.get("ALGORITHM"), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut chars = key.chars();
        let mut c = chars.next()?;
        let mut current = self.root.as_deref_mut();

        while let Some(node) = current {
            match c.cmp(&node.symbol) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        c = next;
                        current = node.middle.as_deref_mut();
                    }
                    None => return node.value.as_mut(),
                },
            }
        }

        None
    }

    /// Returns `true` if the trie contains a value for the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("hello", 42).unwrap();
    ///
    /// assert!(trie.contains("hello"));
    /// assert!(!trie.contains("world"));
    /// ```
    pub fn contains(&self, key: &str) -> bool {
        !key.is_empty() && self.get(key).is_some()
    }

    /// Stores `value` under `key`, returning the value it replaced, if any.
    ///
    /// Nodes are created along the key's path as needed. Storing a key that is
    /// already present only swaps its value: the node count and the key count
    /// stay the same.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is empty. The trie is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.put("sea", 2), Ok(None));
    /// assert_eq!(trie.put("sea", 6), Ok(Some(2)));
    /// assert_eq!(trie.put("", 0), Err(Error::InvalidKey));
    ///
    /// assert_eq!(trie.size(), 1);
    /// assert_eq!(trie.get("sea"), Some(&6));
    /// ```
    pub fn put(&mut self, key: &str, value: V) -> Result<Option<V>, Error> {
        if key.is_empty() {
            debug!("rejected put with an empty key");
            return Err(Error::InvalidKey);
        }

        let chars: Vec<char> = key.chars().collect();
        let mut previous = None;
        self.root = Some(Self::put_recursive(self.root.take(), &chars, value, &mut previous));

        if previous.is_none() {
            self.size += 1;
            trace!(key = key, size = self.size, "inserted new key");
        }

        Ok(previous)
    }

    // Recursive helper for put. Takes ownership of the link it descends into and
    // hands back the subtree root for the parent to store again. `key` is the part
    // of the key still to be placed and is never empty.
    fn put_recursive(
        node: Option<Box<TrieNode<V>>>,
        key: &[char],
        value: V,
        previous: &mut Option<V>,
    ) -> Box<TrieNode<V>> {
        let c = key[0];
        let mut node = node.unwrap_or_else(|| Box::new(TrieNode::new(c)));

        match c.cmp(&node.symbol) {
            Ordering::Less => {
                node.left = Some(Self::put_recursive(node.left.take(), key, value, previous));
            }
            Ordering::Greater => {
                node.right = Some(Self::put_recursive(node.right.take(), key, value, previous));
            }
            Ordering::Equal if key.len() > 1 => {
                node.middle = Some(Self::put_recursive(node.middle.take(), &key[1..], value, previous));
            }
            Ordering::Equal => {
                *previous = node.value.replace(value);
            }
        }

        node
    }

    /// Returns every key that starts with `prefix`, in ascending order.
    ///
    /// The prefix itself is included when it is a key. An empty prefix matches
    /// every key, giving the same result as [`all_keys`](Trie::all_keys).
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for (i, key) in ["she", "sells", "sea", "shells", "shore"].iter().enumerate() {
    ///     trie.put(key, i).unwrap();
    /// }
    ///
    /// assert_eq!(trie.keys_with_prefix("sh"), vec!["she", "shells", "shore"]);
    /// assert!(trie.keys_with_prefix("x").is_empty());
    /// ```
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return self.all_keys();
        }

        let node = match self.find_node(prefix) {
            Some(node) => node,
            None => return Vec::new(),
        };

        let mut keys = Vec::new();
        if node.value.is_some() {
            keys.push(prefix.to_string());
        }

        let mut accumulated = prefix.to_string();
        collect_keys(node.middle.as_deref(), &mut accumulated, &mut keys);
        keys
    }

    /// Returns every key in the trie, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("the", 5).unwrap();
    /// trie.put("by", 4).unwrap();
    ///
    /// assert_eq!(trie.all_keys(), vec!["by", "the"]);
    /// ```
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.size);
        collect_keys(self.root.as_deref(), &mut String::new(), &mut keys);
        keys
    }

    /// Returns an iterator over the key-value pairs of the trie, in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("b", 2).unwrap();
    /// trie.put("a", 1).unwrap();
    ///
    /// let entries: Vec<(String, &i32)> = trie.iter().collect();
    /// assert_eq!(entries, vec![("a".to_string(), &1), ("b".to_string(), &2)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root.as_deref(), String::new())
    }

    /// Returns an iterator over the key-value pairs whose key starts with `prefix`,
    /// in the same order as [`keys_with_prefix`](Trie::keys_with_prefix).
    pub fn iter_prefix(&self, prefix: &str) -> Iter<'_, V> {
        if prefix.is_empty() {
            return self.iter();
        }

        match self.find_node(prefix) {
            Some(node) => Iter::with_head(node.value.as_ref(), node.middle.as_deref(), prefix.to_string()),
            None => Iter::new(None, String::new()),
        }
    }

    // Walks to the node at the end of `key`, whether or not it holds a value
    fn find_node(&self, key: &str) -> Option<&TrieNode<V>> {
        let mut chars = key.chars();
        let mut c = chars.next()?;
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            match c.cmp(&node.symbol) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        c = next;
                        current = node.middle.as_deref();
                    }
                    None => return Some(node),
                },
            }
        }

        None
    }
}

// Default implementation
impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Two tries are equal when they hold the same entries, whatever order built them
impl<V: PartialEq> PartialEq for Trie<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }

        self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Trie<V> {}

impl<K: AsRef<str>, V> Extend<(K, V)> for Trie<V> {
    /// Puts every pair into the trie. Pairs with an empty key are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if self.put(key.as_ref(), value).is_err() {
                warn!("skipped a pair with an empty key while loading");
            }
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Trie<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root)
    }
}
