//! Internal node implementation for the ternary search trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of the
//! trie. Every link is an exclusively owned `Box`, so a subtree is dropped with
//! the node that owns it.

/// Internal node type for the ternary search trie.
///
/// This type is not exposed in the public API but is used internally by the
/// `Trie` type. Each node holds one character, an optional value for the key
/// ending here, and three child links.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode<V> {
    /// The character this node discriminates on
    pub symbol: char,

    /// Subtree of keys with a smaller character at this depth
    pub left: Option<Box<TrieNode<V>>>,

    /// Subtree of keys that share `symbol` and continue one character deeper
    pub middle: Option<Box<TrieNode<V>>>,

    /// Subtree of keys with a larger character at this depth
    pub right: Option<Box<TrieNode<V>>>,

    /// The value of the key ending at this node, if any
    pub value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty node for the given character
    pub fn new(symbol: char) -> Self {
        TrieNode {
            symbol,
            left: None,
            middle: None,
            right: None,
            value: None,
        }
    }

    /// Returns the number of values stored in this subtree
    #[cfg(test)]
    pub fn subtree_size(&self) -> usize {
        let mut count = if self.value.is_some() { 1 } else { 0 };

        for child in self.children() {
            count += child.subtree_size();
        }

        count
    }

    /// Returns the number of nodes in this subtree, this one included
    #[cfg(test)]
    pub fn node_count(&self) -> usize {
        1 + self.children().map(TrieNode::node_count).sum::<usize>()
    }

    #[cfg(test)]
    fn children(&self) -> impl Iterator<Item = &TrieNode<V>> {
        self.left
            .as_deref()
            .into_iter()
            .chain(self.middle.as_deref())
            .chain(self.right.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node() {
        let node: TrieNode<u32> = TrieNode::new('a');

        assert_eq!(node.symbol, 'a');
        assert!(node.value.is_none());
        assert_eq!(node.subtree_size(), 0);
        assert_eq!(node.node_count(), 1);
    }

    #[test]
    fn test_subtree_size() {
        // "b" with "a" to the left, "c" to the right and "bd" down the middle
        let mut root = TrieNode::new('b');
        root.value = Some(1);

        let mut left = TrieNode::new('a');
        left.value = Some(2);
        root.left = Some(Box::new(left));

        root.right = Some(Box::new(TrieNode::new('c')));

        let mut middle = TrieNode::new('d');
        middle.value = Some(3);
        root.middle = Some(Box::new(middle));

        assert_eq!(root.subtree_size(), 3);
        assert_eq!(root.node_count(), 4);
    }
}
