use crate::path::PersistentPath;
use crate::tree::PrefixTree;
use std::cmp::Reverse;
use std::hash::Hash;

/// One histogram entry: a terminating prefix and the number of input
/// sequences that end exactly there.
///
/// The stored path runs from the deepest element toward the root, the order
/// it was built during traversal; [`sequence`](Self::sequence) recovers the
/// left-to-right element order.
#[derive(Debug, Clone)]
pub struct HistogramEntry<T> {
    count: u64,
    path: PersistentPath<T>,
}

impl<T> HistogramEntry<T> {
    pub(crate) fn new(count: u64, path: PersistentPath<T>) -> Self {
        debug_assert!(count > 0, "entries are only emitted for terminating nodes");
        debug_assert!(!path.is_empty(), "the root is never reported");
        Self { count, path }
    }

    /// Number of sequences terminating at this prefix. Always positive.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The prefix, deepest element first.
    pub fn path(&self) -> &PersistentPath<T> {
        &self.path
    }

    /// The prefix in its original left-to-right element order.
    pub fn sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements: Vec<T> = self.path.iter().cloned().collect();
        elements.reverse();
        elements
    }
}

impl<T: Hash + Eq + Clone> PrefixTree<T> {
    /// Returns all histogram entries sorted by descending count.
    ///
    /// The lazy traversal is materialized here; a globally count-sorted
    /// stream cannot be produced without buffering. The sort is stable, so
    /// equal counts keep traversal order, which follows the children maps'
    /// iteration order and is deterministic within a run but not guaranteed
    /// across runs.
    pub fn histogram(&self) -> Vec<HistogramEntry<T>> {
        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_by_key(|entry| Reverse(entry.count()));
        entries
    }
}

/// Builds a prefix tree from `sequences` and returns its histogram, sorted
/// by descending count.
///
/// Each call builds and discards a private tree; there is no shared state
/// between calls.
///
/// # Example
///
/// ```
/// use prefix_histogram::histogram;
///
/// let entries = histogram(vec!["the".chars(), "the".chars(), "there".chars()]);
///
/// assert_eq!(entries[0].sequence(), vec!['t', 'h', 'e']);
/// assert_eq!(entries[0].count(), 2);
/// assert_eq!(entries[1].count(), 1);
/// ```
pub fn histogram<T, S, I>(sequences: S) -> Vec<HistogramEntry<T>>
where
    T: Hash + Eq + Clone,
    S: IntoIterator<Item = I>,
    I: IntoIterator<Item = T>,
{
    PrefixTree::build(sequences).histogram()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_by_word(entries: &[HistogramEntry<char>]) -> Vec<(String, u64)> {
        let mut pairs: Vec<(String, u64)> = entries
            .iter()
            .map(|entry| (entry.sequence().into_iter().collect(), entry.count()))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_repeated_and_extended() {
        let entries = histogram(vec!["the".chars(), "the".chars(), "there".chars()]);

        assert_eq!(
            counts_by_word(&entries),
            vec![("the".to_string(), 2), ("there".to_string(), 1)]
        );

        let total: u64 = entries.iter().map(|entry| entry.count()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_prefix_contained_in_longer_sequence() {
        let entries = histogram(vec!["the".chars(), "therefore".chars()]);

        assert_eq!(
            counts_by_word(&entries),
            vec![("the".to_string(), 1), ("therefore".to_string(), 1)]
        );
    }

    #[test]
    fn test_sorted_descending() {
        let entries = histogram(vec![
            "a".chars(),
            "bb".chars(),
            "bb".chars(),
            "bb".chars(),
            "c".chars(),
            "c".chars(),
        ]);

        assert_eq!(entries[0].count(), 3);
        assert_eq!(entries[0].sequence(), vec!['b', 'b']);
        for pair in entries.windows(2) {
            assert!(pair[0].count() >= pair[1].count());
        }
    }

    #[test]
    fn test_empty_input() {
        let entries = histogram(Vec::<Vec<u8>>::new());
        assert!(entries.is_empty());
    }

    #[test]
    fn test_all_empty_sequences() {
        let entries = histogram(vec![Vec::<u8>::new(), Vec::new()]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_entry_paths_have_elements() {
        let entries = histogram(vec![vec![1u8, 2], vec![1]]);
        for entry in &entries {
            assert!(!entry.path().is_empty());
            assert!(entry.count() > 0);
        }
    }
}
