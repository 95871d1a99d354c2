use std::collections::{HashMap, HashSet};

use log::info;

use crate::errors::DictionaryError;
use crate::tile::Multiset;

/// An immutable set of lowercase words loaded once at startup, providing
/// O(1) membership (`is_word`) and a "words formable from a letter
/// multiset" query (`words_formable_from`). Words are bucketed by length
/// so the formability query doesn't re-scan the whole dictionary for
/// every multiset.
pub struct Dictionary {
    words: HashSet<String>,
    /// words bucketed by length, each bucket sorted for deterministic
    /// iteration order (callers re-sort by their own heuristic anyway).
    by_length: HashMap<usize, Vec<String>>,
}

impl Dictionary {
    /// Accepts lowercase ASCII letter-only strings; rejects anything else.
    pub fn load<I, S>(words: I) -> Result<Dictionary, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        let mut by_length: HashMap<usize, Vec<String>> = HashMap::new();

        for raw in words {
            let word = raw.as_ref();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(DictionaryError::NonConformingEntry(word.to_string()));
            }
            if set.insert(word.to_string()) {
                by_length.entry(word.len()).or_default().push(word.to_string());
            }
        }

        if set.is_empty() {
            return Err(DictionaryError::Empty);
        }

        for bucket in by_length.values_mut() {
            bucket.sort();
        }

        info!("loaded dictionary with {} words", set.len());
        Ok(Dictionary { words: set, by_length })
    }

    /// Case-insensitive membership check.
    pub fn is_word(&self, s: &str) -> bool {
        if s.chars().all(|c| c.is_ascii_lowercase()) {
            self.words.contains(s)
        } else {
            self.words.contains(&s.to_ascii_lowercase())
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every word whose letter-count vector is dominated by `multiset`,
    /// with length in `[3, 12]`. Order is implementation-defined; callers
    /// re-sort by their own heuristic (the search engine sorts by rarity).
    pub fn words_formable_from(&self, multiset: &Multiset) -> Vec<&str> {
        let max_len = (multiset.total() as usize).min(12);
        let mut formable = vec![];
        for len in 3..=max_len {
            if let Some(bucket) = self.by_length.get(&len) {
                for word in bucket {
                    if multiset.dominates_word(word) {
                        formable.push(word.as_str());
                    }
                }
            }
        }
        formable
    }
}
