//! CNU results extractor library
//!
//! Extracts the B4-15-A exam results from pdftotext renderings of three
//! result sheets and merges them by registration number:
//! - Objective test results (the primary candidate list)
//! - Discursive test scores
//! - Titles (credentials) scores
//!
//! # Example
//!
//! ```no_run
//! use cnu_notas::pipeline::{run, ExtractOptions};
//! use cnu_notas::text::Pdftotext;
//! use std::path::Path;
//!
//! let options = ExtractOptions::for_base_dir(Path::new("."));
//! let summary = run(&options, &Pdftotext::default()).expect("Failed to extract");
//! println!("{} rows", summary.rows);
//! ```

pub mod error;
pub mod headers;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod registration;
pub mod segment;
pub mod text;

// Re-export commonly used items
pub use error::{Error, Result};
pub use headers::HeaderFilter;
pub use merge::MergedRecord;
pub use segment::{CandidateRecord, ScoreTable, SectionMarkers, SkipStats};
