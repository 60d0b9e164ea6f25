//! The full extraction run: three sheets in, one merged CSV out

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::headers::HeaderFilter;
use crate::merge::merge;
use crate::output::write_csv;
use crate::segment::{segment_objective, segment_scores, SectionMarkers, SkipStats};
use crate::text::TextSource;

/// Objective-test results (all tracks)
pub const OBJECTIVE_FILE: &str = "objetiva cnu.pdf";
/// Discursive-test results for B4-15-A
pub const DISCURSIVE_FILE: &str = "discursiva cnu B4-15-A.pdf";
/// Titles results for B4-15-A
pub const TITLES_FILE: &str = "titulos cnu B4-15-A.pdf";
/// Merged output
pub const OUTPUT_FILE: &str = "notas_b4_15_a.csv";
/// Optional replacement for the built-in header pattern list
pub const HEADER_PATTERNS_FILE: &str = "header_patterns.txt";

/// Options for an extraction run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub objective_path: PathBuf,
    pub discursive_path: PathBuf,
    pub titles_path: PathBuf,
    pub output_path: PathBuf,
    pub markers: SectionMarkers,
    /// Header pattern file, used only if it exists
    pub header_patterns_path: Option<PathBuf>,
}

impl ExtractOptions {
    /// Standard file names inside `base`
    pub fn for_base_dir(base: &Path) -> Self {
        Self {
            objective_path: base.join(OBJECTIVE_FILE),
            discursive_path: base.join(DISCURSIVE_FILE),
            titles_path: base.join(TITLES_FILE),
            output_path: base.join(OUTPUT_FILE),
            markers: SectionMarkers::default(),
            header_patterns_path: Some(base.join(HEADER_PATTERNS_FILE)),
        }
    }

    /// Header filter for this run: the pattern file if present and
    /// readable, else the built-in list
    pub fn header_filter(&self) -> HeaderFilter {
        let path = match &self.header_patterns_path {
            Some(path) if path.is_file() => path,
            _ => return HeaderFilter::default(),
        };
        match HeaderFilter::from_file(path) {
            Ok(filter) => {
                tracing::info!("Using header patterns from {}", path.display());
                filter
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable header patterns {}: {}", path.display(), e);
                HeaderFilter::default()
            }
        }
    }
}

/// What a run produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub candidates: usize,
    pub discursiva: usize,
    pub titulos: usize,
    /// Rows written to the output file
    pub rows: usize,
    pub objective_skipped: SkipStats,
    pub discursive_skipped: SkipStats,
    pub titles_skipped: SkipStats,
}

/// Convert, segment and merge the three sheets, then write the CSV
///
/// Fails on the first conversion failure, when the objective sheet lacks
/// the section start marker, or when the output cannot be written.
pub fn run<S: TextSource + ?Sized>(options: &ExtractOptions, source: &S) -> Result<RunSummary> {
    let filter = options.header_filter();

    tracing::info!("Extracting objetiva...");
    let objective_text = source.extract_text(&options.objective_path)?;
    let objective = segment_objective(&objective_text, &options.markers, &filter)?;
    tracing::info!(
        "  Found {} {} candidates in objetiva",
        objective.candidates.len(),
        options.markers.start.trim_matches(|c| c == '(' || c == ')')
    );
    objective.skipped.report("objetiva");

    tracing::info!("Extracting discursiva...");
    let discursive_text = source.extract_text(&options.discursive_path)?;
    let discursiva = segment_scores(&discursive_text, &filter);
    tracing::info!("  Found {} candidates in discursiva", discursiva.len());
    discursiva.skipped.report("discursiva");

    tracing::info!("Extracting titulos...");
    let titles_text = source.extract_text(&options.titles_path)?;
    let titulos = segment_scores(&titles_text, &filter);
    tracing::info!("  Found {} candidates in titulos", titulos.len());
    titulos.skipped.report("titulos");

    let summary = RunSummary {
        candidates: objective.candidates.len(),
        discursiva: discursiva.len(),
        titulos: titulos.len(),
        rows: objective.candidates.len(),
        objective_skipped: objective.skipped,
        discursive_skipped: discursiva.skipped,
        titles_skipped: titulos.skipped,
    };

    let merged = merge(objective.candidates, &discursiva, &titulos);
    write_csv(&options.output_path, &merged)?;

    Ok(summary)
}
