//! Ranking
//!
//! Orders a frozen [`FrequencyTable`] into [`RankedEntry`] rows. Ties on count
//! are always broken by ascending token value so output is reproducible.

use serde::Serialize;
use std::cmp::Ordering;

use crate::core::frequency::FrequencyTable;
use crate::core::model::{RunOptions, Token};

/// One row of the ranked report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// Position in the final order, starting at 1
    pub rank: usize,

    /// Rank of the first entry in this entry's equal-count run
    pub tied_rank: usize,

    pub token: Token,

    pub count: u64,

    /// Share of the displayed occurrences, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

/// Sort, truncate and number the table
pub fn rank(table: FrequencyTable, options: &RunOptions) -> Vec<RankedEntry> {
    let mut counts = table.into_counts();
    counts.sort_by(|a, b| compare(a, b, options.reverse));

    if options.top_n > 0 {
        counts.truncate(options.top_n);
    }

    let shown_total: u64 = counts.iter().map(|(_, count)| count).sum();

    let mut entries = Vec::with_capacity(counts.len());
    let mut tied_rank = 0;
    let mut previous_count = None;

    for (index, (token, count)) in counts.into_iter().enumerate() {
        let rank = index + 1;
        if previous_count != Some(count) {
            tied_rank = rank;
            previous_count = Some(count);
        }

        let percent = options
            .show_percent
            .then(|| count as f64 / shown_total as f64 * 100.0);

        entries.push(RankedEntry {
            rank,
            tied_rank,
            token,
            count,
            percent,
        });
    }

    entries
}

fn compare(a: &(Token, u64), b: &(Token, u64), reverse: bool) -> Ordering {
    let by_count = if reverse { a.1.cmp(&b.1) } else { b.1.cmp(&a.1) };
    by_count.then_with(|| a.0.cmp(&b.0))
}
