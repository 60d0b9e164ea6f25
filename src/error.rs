//! Error types for the CNU results extractor

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the extractor
#[derive(Error, Debug)]
pub enum Error {
    /// The PDF-to-text converter could not produce text for an input
    #[error("Text conversion failed for {}: {reason}", .path.display())]
    Conversion { path: PathBuf, reason: String },

    /// The objective-results text lacks the section start marker
    #[error("Section {0} not found in objetiva text")]
    SectionNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Shorthand for a conversion failure on `path`
    pub fn conversion(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::Conversion {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
