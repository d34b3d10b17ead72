use crate::histogram::{histogram, HistogramEntry};
use std::iter::Peekable;
use std::str::Chars;

/// Iterator adapter splitting a character stream into normalized words.
///
/// Each yielded word is a `Vec<char>` of lowercased characters. Unicode
/// whitespace delimits words; punctuation and symbol characters are dropped
/// and split the surrounding token into separate words ("end.Start" yields
/// "end" then "start"). An apostrophe ends the word and swallows the rest of
/// the token, so "don't" yields "don". Empty words are never yielded.
pub struct Words<I: Iterator<Item = char>> {
    chars: Peekable<I>,
}

impl<I: Iterator<Item = char>> Words<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Words<I> {
    type Item = Vec<char>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word = Vec::new();

        while let Some(current) = self.chars.next() {
            if current.is_whitespace() {
                if !word.is_empty() {
                    return Some(word);
                }
            } else if current == '\'' {
                // Swallow the apostrophe suffix up to the next whitespace.
                while matches!(self.chars.peek(), Some(peeked) if !peeked.is_whitespace()) {
                    self.chars.next();
                }
                if !word.is_empty() {
                    return Some(word);
                }
            } else if current.is_alphanumeric() {
                word.extend(current.to_lowercase());
            } else if !word.is_empty() {
                // Punctuation or symbol: what follows starts a new word.
                return Some(word);
            }
        }

        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }
}

/// Splits `text` into normalized words.
pub fn words(text: &str) -> Words<Chars<'_>> {
    Words::new(text.chars())
}

/// Preprocesses `text` into words and returns their prefix histogram,
/// sorted by descending count.
///
/// # Example
///
/// ```
/// use prefix_histogram::word_histogram;
///
/// let entries = word_histogram("The fox saw the hen.");
/// let top: String = entries[0].sequence().into_iter().collect();
///
/// assert_eq!(top, "the");
/// assert_eq!(entries[0].count(), 2);
/// ```
pub fn word_histogram(text: &str) -> Vec<HistogramEntry<char>> {
    histogram(words(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<String> {
        words(text)
            .map(|word| word.into_iter().collect())
            .collect()
    }

    #[test]
    fn test_split_on_whitespace() {
        assert_eq!(collect("the quick fox"), vec!["the", "quick", "fox"]);
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(collect("The QUICK Fox"), vec!["the", "quick", "fox"]);
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(collect("hello, world!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_embedded_punctuation_splits() {
        assert_eq!(collect("end.Start"), vec!["end", "start"]);
    }

    #[test]
    fn test_apostrophe_truncates_word() {
        assert_eq!(collect("don't stop"), vec!["don", "stop"]);
    }

    #[test]
    fn test_leading_apostrophe_drops_token() {
        assert_eq!(collect("'tis here"), vec!["here"]);
    }

    #[test]
    fn test_mixed_whitespace() {
        assert_eq!(collect("  a\t\tb\n\nc  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(collect("").is_empty());
        assert!(collect("  \n\t ").is_empty());
        assert!(collect("... !!!").is_empty());
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(collect("agent 007"), vec!["agent", "007"]);
    }

    #[test]
    fn test_word_histogram_end_to_end() {
        let entries = word_histogram("the hen, the fox; the hen");

        let mut pairs: Vec<(String, u64)> = entries
            .iter()
            .map(|entry| (entry.sequence().into_iter().collect(), entry.count()))
            .collect();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("fox".to_string(), 1),
                ("hen".to_string(), 2),
                ("the".to_string(), 3),
            ]
        );
    }
}
