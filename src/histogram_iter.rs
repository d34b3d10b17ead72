use crate::histogram::HistogramEntry;
use crate::path::PersistentPath;
use crate::tree::PrefixTree;
use slotmap::DefaultKey;
use std::hash::Hash;

/// A pending node visit: the node and the path from it back to the root.
struct Frame<T> {
    node: DefaultKey,
    path: PersistentPath<T>,
}

/// Lazy depth-first traversal of a built tree, yielding one histogram entry
/// per node with a positive termination count, at any depth.
///
/// Uses an explicit work stack instead of recursion so arbitrarily deep trees
/// cannot overflow the call stack. Each child frame's path is built by a
/// single `push` on the parent's path, so emitted entries share tail segments
/// structurally.
///
/// Entries come out in traversal order, unsorted; paths run from the deepest
/// element toward the root.
pub struct HistogramIter<'a, T> {
    tree: &'a PrefixTree<T>,
    stack: Vec<Frame<T>>,
}

impl<'a, T: Hash + Eq + Clone> HistogramIter<'a, T> {
    pub(crate) fn new(tree: &'a PrefixTree<T>) -> Self {
        Self {
            tree,
            stack: vec![Frame {
                node: tree.root,
                path: PersistentPath::empty(),
            }],
        }
    }
}

impl<T: Hash + Eq + Clone> Iterator for HistogramIter<'_, T> {
    type Item = HistogramEntry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;

        while let Some(frame) = self.stack.pop() {
            let node = &tree.nodes[frame.node];

            for (element, &child) in &node.children {
                self.stack.push(Frame {
                    node: child,
                    path: frame.path.push(element.clone()),
                });
            }

            // Root terminations record empty sequences; never reported.
            if frame.node != tree.root && node.terminations > 0 {
                return Some(HistogramEntry::new(node.terminations, frame.path));
            }
        }

        None
    }
}

impl<T: Hash + Eq + Clone> PrefixTree<T> {
    /// Returns a lazy iterator over unsorted histogram entries.
    ///
    /// Use [`histogram`](Self::histogram) for the sorted result.
    pub fn entries(&self) -> HistogramIter<'_, T> {
        HistogramIter::new(self)
    }
}

impl<'a, T: Hash + Eq + Clone> IntoIterator for &'a PrefixTree<T> {
    type Item = HistogramEntry<T>;
    type IntoIter = HistogramIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_empty_tree() {
        let tree = PrefixTree::<char>::new();
        assert_eq!(tree.entries().count(), 0);
    }

    #[test]
    fn test_entries_skip_intermediate_nodes() {
        let tree = PrefixTree::build(vec!["abc".chars()]);

        // "a" and "ab" are hops only; just "abc" terminates.
        let entries: Vec<_> = tree.entries().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].count(), 1);
        assert_eq!(entries[0].sequence(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_entries_nested_termination() {
        let tree = PrefixTree::build(vec!["the".chars(), "therefore".chars()]);

        let mut sequences: Vec<String> = tree
            .entries()
            .map(|entry| entry.sequence().into_iter().collect())
            .collect();
        sequences.sort();

        assert_eq!(sequences, vec!["the".to_string(), "therefore".to_string()]);
    }

    #[test]
    fn test_entries_paths_deepest_first() {
        let tree = PrefixTree::build(vec!["ab".chars()]);

        let entry = tree.entries().next().unwrap();
        let raw: Vec<char> = entry.path().iter().copied().collect();
        assert_eq!(raw, vec!['b', 'a']);
    }

    #[test]
    fn test_entries_root_terminations_not_reported() {
        let mut tree = PrefixTree::<u8>::new();
        tree.insert(std::iter::empty());
        tree.insert(vec![7]);

        let entries: Vec<_> = tree.entries().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].sequence(), vec![7]);
    }

    #[test]
    fn test_into_iterator() {
        let tree = PrefixTree::build(vec![vec![1u8], vec![1, 2]]);
        let count = (&tree).into_iter().count();
        assert_eq!(count, 2);
    }
}
