//! Order-2 successor distribution.

use std::collections::HashMap;

/// Two consecutive tokens used as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    /// Older of the two tokens.
    pub first: String,
    /// Token immediately after `first`.
    pub second: String,
}

impl PairKey {
    /// Build a key from two tokens.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self { first: first.into(), second: second.into() }
    }
}

/// Mapping from each observed token pair to the tokens that followed it.
///
/// Successors keep duplicates in the order they were seen, so picking one
/// uniformly is weighted by frequency. Keys are held in first-observed order
/// to give restarts an explicit, indexable key set.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    by_key: HashMap<PairKey, usize>,
    entries: Vec<(PairKey, Vec<String>)>,
}

impl Distribution {
    /// Build a distribution from per-song token sequences.
    ///
    /// Songs with fewer than three tokens contribute nothing.
    pub fn build<S: AsRef<[String]>>(songs: &[S]) -> Self {
        let mut distribution = Self::default();

        for song in songs {
            let tokens = song.as_ref();
            let [first, second, rest @ ..] = tokens else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }

            let (mut prev1, mut prev2) = (first, second);
            for token in rest {
                distribution.record(prev1, prev2, token);
                prev1 = prev2;
                prev2 = token;
            }
        }

        tracing::debug!(
            "Built distribution with {} pairs from {} songs",
            distribution.len(),
            songs.len()
        );
        distribution
    }

    fn record(&mut self, first: &str, second: &str, successor: &str) {
        let key = PairKey::new(first, second);
        if let Some(&idx) = self.by_key.get(&key) {
            self.entries[idx].1.push(successor.to_string());
            return;
        }

        let idx = self.entries.len();
        self.by_key.insert(key.clone(), idx);
        self.entries.push((key, vec![successor.to_string()]));
    }

    /// Successors recorded after `(first, second)`, if the pair was observed.
    pub fn successors(&self, first: &str, second: &str) -> Option<&[String]> {
        // HashMap lookups need an owned key; pairs are short.
        let key = PairKey::new(first, second);
        self.by_key
            .get(&key)
            .and_then(|&idx| self.entries.get(idx))
            .map(|(_, successors)| successors.as_slice())
    }

    /// Key at position `idx` of the distinct key set.
    pub fn key_at(&self, idx: usize) -> Option<&PairKey> {
        self.entries.get(idx).map(|(key, _)| key)
    }

    /// Distinct keys in first-observed order.
    pub fn keys(&self) -> impl Iterator<Item = &PairKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pair was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
