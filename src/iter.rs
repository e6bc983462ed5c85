//! Ordered traversal of a ternary search trie.
//!
//! Two flavours live here. [`collect_keys`] is the recursive walk used by
//! `keys_with_prefix` and `all_keys`: it threads one mutable key buffer through
//! the whole subtree. [`Iter`] and [`IntoIter`] are lazy iterators that keep an
//! explicit stack instead, so a caller can stop early without walking the rest.
//!
//! All three visit a subtree in the same order: `left`, the node's own key,
//! `middle` (one character longer), then `right`. That order is ascending by
//! character, which is what every enumeration in this crate promises.

use std::iter::FusedIterator;

use crate::node::TrieNode;

/// Appends every key stored under `node` to `out`, each prefixed by the current
/// contents of `prefix`.
///
/// `prefix` is the accumulated key so far. It is left exactly as it was found
/// when this call returns.
pub(crate) fn collect_keys<V>(node: Option<&TrieNode<V>>, prefix: &mut String, out: &mut Vec<String>) {
    let node = match node {
        Some(node) => node,
        None => return,
    };

    collect_keys(node.left.as_deref(), prefix, out);

    prefix.push(node.symbol);
    if node.value.is_some() {
        out.push(prefix.clone());
    }
    collect_keys(node.middle.as_deref(), prefix, out);
    prefix.pop();

    collect_keys(node.right.as_deref(), prefix, out);
}

// A pending unit of work on the iterator stack
enum Step<N, V> {
    // Expand a subtree whose keys all start with the given prefix
    Descend(N, String),
    // Yield a finished entry
    Emit(String, V),
}

/// An iterator over the entries of a trie, in ascending key order.
///
/// Created by [`Trie::iter`](crate::Trie::iter) and
/// [`Trie::iter_prefix`](crate::Trie::iter_prefix).
pub struct Iter<'a, V> {
    stack: Vec<Step<&'a TrieNode<V>, &'a V>>,
}

impl<'a, V> Iter<'a, V> {
    /// An iterator over the subtree at `node`, whose keys all start with `prefix`.
    pub(crate) fn new(node: Option<&'a TrieNode<V>>, prefix: String) -> Self {
        let mut stack = Vec::new();
        if let Some(node) = node {
            stack.push(Step::Descend(node, prefix));
        }
        Iter { stack }
    }

    /// Like [`Iter::new`], but first yields `(prefix, value)` for a key equal to the prefix.
    pub(crate) fn with_head(head: Option<&'a V>, node: Option<&'a TrieNode<V>>, prefix: String) -> Self {
        let mut iter = Self::new(node, prefix.clone());
        if let Some(value) = head {
            iter.stack.push(Step::Emit(prefix, value));
        }
        iter
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Emit(key, value) => return Some((key, value)),
                Step::Descend(node, prefix) => {
                    // Pushed in reverse so that `left` is popped first
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push(Step::Descend(right, prefix.clone()));
                    }

                    let mut key = prefix.clone();
                    key.push(node.symbol);
                    if let Some(middle) = node.middle.as_deref() {
                        self.stack.push(Step::Descend(middle, key.clone()));
                    }
                    if let Some(value) = node.value.as_ref() {
                        self.stack.push(Step::Emit(key, value));
                    }

                    if let Some(left) = node.left.as_deref() {
                        self.stack.push(Step::Descend(left, prefix));
                    }
                }
            }
        }

        None
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

/// An owning iterator over the entries of a trie, in ascending key order.
///
/// Created by the `IntoIterator` implementation of [`Trie`](crate::Trie).
pub struct IntoIter<V> {
    stack: Vec<Step<Box<TrieNode<V>>, V>>,
}

impl<V> IntoIter<V> {
    pub(crate) fn new(root: Option<Box<TrieNode<V>>>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push(Step::Descend(root, String::new()));
        }
        IntoIter { stack }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Emit(key, value) => return Some((key, value)),
                Step::Descend(node, prefix) => {
                    let TrieNode {
                        symbol,
                        left,
                        middle,
                        right,
                        value,
                    } = *node;

                    if let Some(right) = right {
                        self.stack.push(Step::Descend(right, prefix.clone()));
                    }

                    let mut key = prefix.clone();
                    key.push(symbol);
                    if let Some(middle) = middle {
                        self.stack.push(Step::Descend(middle, key.clone()));
                    }
                    if let Some(value) = value {
                        self.stack.push(Step::Emit(key, value));
                    }

                    if let Some(left) = left {
                        self.stack.push(Step::Descend(left, prefix));
                    }
                }
            }
        }

        None
    }
}

impl<V> FusedIterator for IntoIter<V> {}

#[cfg(test)]
mod tests {
    use super::*;

    // "ab" -> 1, "b" -> 2, "a" has no value, "c" -> 3 to the right of "b"
    fn sample() -> TrieNode<u32> {
        let mut a = TrieNode::new('a');
        let mut ab = TrieNode::new('b');
        ab.value = Some(1);
        a.middle = Some(Box::new(ab));

        let mut c = TrieNode::new('c');
        c.value = Some(3);

        let mut b = TrieNode::new('b');
        b.value = Some(2);
        b.left = Some(Box::new(a));
        b.right = Some(Box::new(c));
        b
    }

    #[test]
    fn test_collect_keys_order() {
        let root = sample();
        let mut prefix = String::new();
        let mut keys = Vec::new();

        collect_keys(Some(&root), &mut prefix, &mut keys);

        assert_eq!(keys, vec!["ab", "b", "c"]);
    }

    #[test]
    fn test_collect_keys_restores_prefix() {
        let root = sample();
        let mut prefix = "xy".to_string();
        let mut keys = Vec::new();

        collect_keys(Some(&root), &mut prefix, &mut keys);

        assert_eq!(prefix, "xy");
        assert_eq!(keys, vec!["xyab", "xyb", "xyc"]);
    }

    #[test]
    fn test_collect_keys_empty() {
        let mut prefix = String::new();
        let mut keys = Vec::new();

        collect_keys::<u32>(None, &mut prefix, &mut keys);

        assert!(keys.is_empty());
    }

    #[test]
    fn test_iter_matches_collect_keys() {
        let root = sample();
        let entries: Vec<(String, &u32)> = Iter::new(Some(&root), String::new()).collect();

        assert_eq!(
            entries,
            vec![("ab".to_string(), &1), ("b".to_string(), &2), ("c".to_string(), &3)]
        );
    }

    #[test]
    fn test_iter_with_head() {
        let root = sample();
        let head = 9;
        let keys: Vec<String> = Iter::with_head(Some(&head), Some(&root), "p".to_string())
            .map(|(key, _)| key)
            .collect();

        assert_eq!(keys, vec!["p", "pab", "pb", "pc"]);
    }

    #[test]
    fn test_into_iter_moves_values() {
        let entries: Vec<(String, u32)> = IntoIter::new(Some(Box::new(sample()))).collect();

        assert_eq!(
            entries,
            vec![("ab".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)]
        );
    }
}
