//! Page boilerplate detection
//!
//! pdftotext interleaves the repeating page furniture (titles, column
//! headers, legends, page numbers) with the candidate data. A line is
//! treated as boilerplate when it contains any configured substring.
//!
//! The pattern list is data, not code: the built-in list lives in
//! `header_patterns.txt` next to this file and can be replaced at run
//! time with a file of the same format.

use std::path::Path;

use crate::error::Result;

/// Built-in pattern list for the CNU B4 result sheets
const DEFAULT_PATTERNS: &str = include_str!("header_patterns.txt");

/// Substring-based header classifier
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFilter {
    patterns: Vec<String>,
}

impl HeaderFilter {
    /// Build a filter from an explicit list of substrings
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    /// Parse a pattern list: one substring per line, blank lines and
    /// `#` comments ignored
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load a pattern list from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Configured patterns, in file order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check if a (trimmed) line is repeating page boilerplate
    pub fn is_header(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| line.contains(p.as_str()))
    }
}

impl Default for HeaderFilter {
    fn default() -> Self {
        Self::parse(DEFAULT_PATTERNS)
    }
}
