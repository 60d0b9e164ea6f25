//! Discursive and titles sheet segmentation
//!
//! Both auxiliary sheets are two-column tables (registration number,
//! score) covering a single track, so the whole text is one section.

use std::collections::HashMap;

use super::{data_values, SkipStats};
use crate::headers::HeaderFilter;
use crate::registration::is_registration;

/// Registration number to normalized score, from one auxiliary sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    pub scores: HashMap<String, String>,
    pub skipped: SkipStats,
}

impl ScoreTable {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score for a candidate, or `""` when the candidate is not listed
    pub fn score_for(&self, inscricao: &str) -> &str {
        self.scores.get(inscricao).map(String::as_str).unwrap_or("")
    }
}

/// Convert a decimal comma to a decimal point (`"7,5"` -> `"7.5"`)
pub fn normalize_score(value: &str) -> String {
    value.replace(',', ".")
}

/// Segment already filtered values into (registration, score) pairs
pub fn segment_values(values: &[&str]) -> ScoreTable {
    let mut table = ScoreTable::default();
    let mut i = 0;

    while i + 2 <= values.len() {
        let inscricao = values[i];
        if !is_registration(inscricao) {
            tracing::trace!(value = inscricao, "stray value");
            table.skipped.stray += 1;
            i += 1;
            continue;
        }
        let previous = table
            .scores
            .insert(inscricao.to_string(), normalize_score(values[i + 1]));
        if previous.is_some() {
            tracing::trace!(inscricao, "duplicate registration number");
            table.skipped.duplicates += 1;
        }
        i += 2;
    }

    table.skipped.trailing = values.len() - i;
    table
}

/// Extract the score table from a discursive or titles sheet text
pub fn segment_scores(text: &str, filter: &HeaderFilter) -> ScoreTable {
    let values = data_values(text, filter);
    segment_values(&values)
}
