//! PDF to text conversion
//!
//! Conversion is delegated to Poppler's `pdftotext`, run once per input
//! with output on stdout. The [`TextSource`] trait lets the pipeline run
//! against other sources (in-memory text in tests).

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Something that turns a PDF file into its linear text
pub trait TextSource {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// `pdftotext <pdf> -`
#[derive(Debug, Clone)]
pub struct Pdftotext {
    /// Converter executable, looked up on `PATH` when not absolute
    pub program: PathBuf,
}

impl Default for Pdftotext {
    fn default() -> Self {
        Self {
            program: PathBuf::from("pdftotext"),
        }
    }
}

impl TextSource for Pdftotext {
    fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(Error::conversion(path, "file not found"));
        }

        let program = self.program.display();
        tracing::debug!(%program, path = %path.display(), "running converter");
        let output = Command::new(&self.program)
            .arg(path)
            .arg("-")
            .output()
            .map_err(|e| Error::conversion(path, format!("could not run {}: {}", program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("{} exited with {}", program, output.status),
                msg => format!("{} exited with {}: {}", program, output.status, msg),
            };
            return Err(Error::conversion(path, reason));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
