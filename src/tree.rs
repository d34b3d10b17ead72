use ahash::AHashMap as HashMap;
use slotmap::{DefaultKey, SlotMap};
use std::hash::Hash;

/// A node in the prefix tree.
///
/// Nodes live in the tree's SlotMap arena and refer to their children by key.
#[derive(Debug)]
pub(crate) struct TreeNode<T> {
    /// Child node per distinct next element.
    pub(crate) children: HashMap<T, DefaultKey>,
    /// Number of input sequences that end exactly at this node.
    pub(crate) terminations: u64,
}

impl<T> TreeNode<T> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminations: 0,
        }
    }
}

/// A prefix tree (trie) over sequences of `T`, counting terminations.
///
/// Each path from the root spells out a distinct prefix; every node carries
/// the number of input sequences whose last element lands exactly there.
/// Nodes are created lazily during insertion and never removed.
///
/// # Example
///
/// ```
/// use prefix_histogram::PrefixTree;
///
/// let tree = PrefixTree::build(vec!["the".chars(), "therefore".chars()]);
/// assert_eq!(tree.len(), 2);
///
/// let entries = tree.histogram();
/// assert_eq!(entries.len(), 2);
/// ```
pub struct PrefixTree<T> {
    /// Node storage; keys are stable for the lifetime of the tree.
    pub(crate) nodes: SlotMap<DefaultKey, TreeNode<T>>,
    /// The root node. Its termination count records empty input sequences,
    /// which are never reported.
    pub(crate) root: DefaultKey,

    /// Number of sequences inserted.
    sequences: usize,
}

impl<T: Hash + Eq + Clone> PrefixTree<T> {
    /// Creates an empty tree holding only the root node.
    pub fn new() -> Self {
        let mut nodes = SlotMap::new();
        let root = nodes.insert(TreeNode::new());
        Self {
            nodes,
            root,
            sequences: 0,
        }
    }

    /// Inserts one sequence, walking from the root and creating missing
    /// child nodes along the way.
    ///
    /// The node reached by the final element gets its termination count
    /// incremented. An empty sequence increments the root counter, which
    /// never appears in the histogram.
    pub fn insert<I: IntoIterator<Item = T>>(&mut self, sequence: I) {
        let mut current = self.root;

        for element in sequence {
            let existing = self.nodes[current].children.get(&element).copied();
            current = match existing {
                Some(child) => child,
                None => {
                    let child = self.nodes.insert(TreeNode::new());
                    self.nodes[current].children.insert(element, child);
                    child
                }
            };
        }

        self.nodes[current].terminations += 1;
        self.sequences += 1;
    }

    /// Inserts every sequence from the iterator.
    pub fn extend<S, I>(&mut self, sequences: S)
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        for sequence in sequences {
            self.insert(sequence);
        }
    }

    /// Builds a tree from a collection of sequences.
    ///
    /// The input is consumed in a single pass; the returned tree is
    /// fully formed and only read afterwards.
    pub fn build<S, I>(sequences: S) -> Self
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(sequences);
        tree
    }

    /// Returns the number of sequences inserted, empty ones included.
    pub fn len(&self) -> usize {
        self.sequences
    }

    /// Returns true if no sequences have been inserted.
    pub fn is_empty(&self) -> bool {
        self.sequences == 0
    }

    /// Returns size statistics for the built tree.
    pub fn stats(&self) -> TreeStats {
        let terminating = self
            .nodes
            .iter()
            .filter(|&(key, node)| key != self.root && node.terminations > 0)
            .count();

        TreeStats {
            sequences: self.sequences,
            nodes: self.nodes.len() - 1,
            terminating,
        }
    }
}

impl<T: Hash + Eq + Clone> Default for PrefixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about a built tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeStats {
    /// Number of sequences inserted
    pub sequences: usize,
    /// Number of nodes excluding the root, i.e. distinct prefixes
    pub nodes: usize,
    /// Number of non-root nodes with a positive termination count
    pub terminating: usize,
}
