//! Record segmentation
//!
//! pdftotext emits one table cell per line, so a sheet becomes a flat
//! sequence of values with page furniture interleaved. Segmentation drops
//! blanks and boilerplate, then walks the remaining values with a cursor,
//! grouping them into fixed-size records that start at a registration
//! number.

pub mod objective;
pub mod scores;

pub use objective::{segment_objective, CandidateRecord, ObjectiveSheet, SectionMarkers};
pub use scores::{segment_scores, ScoreTable};

use crate::headers::HeaderFilter;

/// Counts of values the cursor walk could not place into a record
///
/// Segmentation is deliberately lossy: noisy conversions are tolerated by
/// skipping. These counts let a reader audit how much was dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipStats {
    /// Values skipped because they are not registration numbers
    pub stray: usize,
    /// Registration numbers immediately followed by another one
    pub orphans: usize,
    /// Values left over at the end, too few to form a record
    pub trailing: usize,
    /// Registration numbers seen more than once (last value kept)
    pub duplicates: usize,
}

impl SkipStats {
    /// Total number of values or records that did not make it through
    pub fn total(&self) -> usize {
        self.stray + self.orphans + self.trailing + self.duplicates
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Log the counts: `warn` when something was dropped, `debug` otherwise
    pub fn report(&self, source: &str) {
        if self.is_clean() {
            tracing::debug!(source, "no values skipped");
        } else {
            tracing::warn!(
                source,
                stray = self.stray,
                orphans = self.orphans,
                trailing = self.trailing,
                duplicates = self.duplicates,
                "skipped values while segmenting {}",
                source
            );
        }
    }
}

/// Trim every line, drop blank lines and page boilerplate
pub fn data_values<'a>(text: &'a str, filter: &HeaderFilter) -> Vec<&'a str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !filter.is_header(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_values_drops_blanks_and_headers() {
        let text = "CONCURSO PÚBLICO\n\n  250012345678  \r\nPágina 2\n\t\n7,5\n\x0c";
        let values = data_values(text, &HeaderFilter::default());
        assert_eq!(values, vec!["250012345678", "7,5"]);
    }

    #[test]
    fn test_data_values_keeps_order() {
        let values = data_values("c\nb\na", &HeaderFilter::default());
        assert_eq!(values, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_skip_stats_total() {
        let stats = SkipStats {
            stray: 2,
            orphans: 1,
            trailing: 3,
            duplicates: 0,
        };
        assert_eq!(stats.total(), 6);
        assert!(!stats.is_clean());
        assert!(SkipStats::default().is_clean());
    }
}
