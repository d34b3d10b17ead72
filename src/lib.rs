//! # Prefix Histogram
//!
//! Computes a frequency histogram over all prefixes of a stream of finite
//! sequences: for every distinct prefix at which at least one input sequence
//! ends, how many input sequences end exactly there, including prefixes
//! nested inside longer sequences ("the" counted independently of
//! "therefore").
//!
//! The input is consumed once into a prefix tree (trie); a depth-first
//! traversal then emits one entry per terminating node, each carrying a
//! structurally shared [`PersistentPath`] back to the root.
//!
//! ## Example
//!
//! ```
//! use prefix_histogram::histogram;
//!
//! let entries = histogram(vec!["the".chars(), "the".chars(), "therefore".chars()]);
//!
//! let top: String = entries[0].sequence().into_iter().collect();
//! assert_eq!(top, "the");
//! assert_eq!(entries[0].count(), 2);
//!
//! let total: u64 = entries.iter().map(|e| e.count()).sum();
//! assert_eq!(total, 3);
//! ```
//!
//! ## Performance
//!
//! - Tree construction is O(total input elements), one hash lookup per element
//! - Traversal is O(nodes); each path extension is an O(1) shared prepend
//! - The final sort materializes O(distinct terminating prefixes) entries

mod histogram;
mod histogram_iter;
mod path;
mod tree;
mod words;


pub use histogram::{histogram, HistogramEntry};
pub use histogram_iter::HistogramIter;
pub use path::{PathError, PathIter, PersistentPath};
pub use tree::{PrefixTree, TreeStats};
pub use words::{word_histogram, words, Words};
