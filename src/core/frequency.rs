//! Frequency accumulation

use std::collections::HashMap;

use crate::core::model::Token;

/// Occurrence counts per token, owned by a single run
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<Token, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token in `tokens`
    pub fn record<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            *self.counts.entry(token).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// Count for a single token (0 when unseen)
    #[cfg(test)]
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total tokens recorded
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Consume the table into `(token, count)` pairs in arbitrary order
    pub fn into_counts(self) -> Vec<(Token, u64)> {
        self.counts.into_iter().collect()
    }
}
