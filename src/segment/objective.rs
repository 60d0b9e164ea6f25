//! Objective-test sheet segmentation
//!
//! The objective sheet concatenates every exam track. Only the values
//! between the track's start marker and the next track's marker are
//! segmented, in groups of seven.

use super::{data_values, SkipStats};
use crate::error::{Error, Result};
use crate::headers::HeaderFilter;
use crate::registration::is_registration;

/// Number of values in one objective-sheet row
pub const FIELDS: usize = 7;

/// Literal markers bounding one track inside the objective sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarkers {
    pub start: String,
    pub end: String,
}

impl Default for SectionMarkers {
    /// Track B4-15-A, followed by B4-16-A
    fn default() -> Self {
        Self {
            start: "(B4-15-A)".to_string(),
            end: "(B4-16-A)".to_string(),
        }
    }
}

/// One candidate row of the objective sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub inscricao: String,
    pub total_acertos: String,
    pub nota_conhecimentos_gerais: String,
    pub nota_conhecimentos_especificos: String,
    pub nota_prova_objetiva: String,
    pub situacao_prova_objetiva: String,
    pub classificacao: String,
}

impl CandidateRecord {
    /// Build a record from exactly seven values in sheet column order
    fn from_values(values: &[&str]) -> Self {
        Self {
            inscricao: values[0].to_string(),
            total_acertos: values[1].to_string(),
            nota_conhecimentos_gerais: values[2].to_string(),
            nota_conhecimentos_especificos: values[3].to_string(),
            nota_prova_objetiva: values[4].to_string(),
            situacao_prova_objetiva: values[5].to_string(),
            classificacao: values[6].to_string(),
        }
    }
}

/// Candidates found in one track of the objective sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectiveSheet {
    /// Records in document order
    pub candidates: Vec<CandidateRecord>,
    pub skipped: SkipStats,
}

/// Slice out the text between `markers.start` and `markers.end`
///
/// A missing end marker means the track is the last one in the document.
pub fn section<'a>(text: &'a str, markers: &SectionMarkers) -> Result<&'a str> {
    let start = text
        .find(&markers.start)
        .ok_or_else(|| Error::SectionNotFound(markers.start.clone()))?;
    let rest = &text[start..];
    Ok(match rest.find(&markers.end) {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Segment the values of an already filtered section into candidate records
pub fn segment_values(values: &[&str]) -> ObjectiveSheet {
    let mut sheet = ObjectiveSheet::default();
    let mut i = 0;

    while i + FIELDS <= values.len() {
        if !is_registration(values[i]) {
            tracing::trace!(value = values[i], "stray value");
            sheet.skipped.stray += 1;
            i += 1;
            continue;
        }
        // A registration number with no data of its own
        if is_registration(values[i + 1]) {
            tracing::trace!(inscricao = values[i], "orphan registration number");
            sheet.skipped.orphans += 1;
            i += 1;
            continue;
        }
        sheet
            .candidates
            .push(CandidateRecord::from_values(&values[i..i + FIELDS]));
        i += FIELDS;
    }

    sheet.skipped.trailing = values.len() - i;
    sheet
}

/// Extract the candidate records of one track from the objective sheet text
///
/// Fails with [`Error::SectionNotFound`] when the start marker is absent.
/// Everything else that does not fit the seven-value layout is skipped and
/// counted in [`ObjectiveSheet::skipped`].
pub fn segment_objective(
    text: &str,
    markers: &SectionMarkers,
    filter: &HeaderFilter,
) -> Result<ObjectiveSheet> {
    let section = section(text, markers)?;
    let values = data_values(section, filter);
    Ok(segment_values(&values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row<'a>(inscricao: &'a str, nota: &'a str) -> Vec<&'a str> {
        vec![inscricao, "50", "20,00", "30,00", nota, "Aprovado", "12"]
    }

    fn sheet_text(rows: &[Vec<&str>]) -> String {
        let mut text = String::from("CONCURSO PÚBLICO NACIONAL UNIFICADO\n");
        text.push_str("Cargo: Engenheiro Agrônomo (B4-15-A)\n");
        text.push_str("Inscrição\nTotal de Acertos\n\n");
        for row in rows {
            for value in row {
                text.push_str(value);
                text.push('\n');
            }
        }
        text
    }

    #[test]
    fn test_missing_start_marker() {
        let result = segment_objective(
            "250012345678\n50\n",
            &SectionMarkers::default(),
            &HeaderFilter::default(),
        );
        assert!(matches!(result, Err(Error::SectionNotFound(ref m)) if m == "(B4-15-A)"));
    }

    #[test]
    fn test_well_formed_rows_in_order() {
        let rows = vec![
            row("250000000001", "50.0"),
            row("250000000002", "48.5"),
            row("250000000003", "47.0"),
        ];
        let sheet = segment_objective(
            &sheet_text(&rows),
            &SectionMarkers::default(),
            &HeaderFilter::default(),
        )
        .unwrap();

        assert_eq!(sheet.candidates.len(), 3);
        assert!(sheet.skipped.is_clean());
        let first = &sheet.candidates[0];
        assert_eq!(first.inscricao, "250000000001");
        assert_eq!(first.total_acertos, "50");
        assert_eq!(first.nota_conhecimentos_gerais, "20,00");
        assert_eq!(first.nota_conhecimentos_especificos, "30,00");
        assert_eq!(first.nota_prova_objetiva, "50.0");
        assert_eq!(first.situacao_prova_objetiva, "Aprovado");
        assert_eq!(first.classificacao, "12");
        assert_eq!(sheet.candidates[2].inscricao, "250000000003");
    }

    #[test]
    fn test_section_stops_at_end_marker() {
        let mut text = sheet_text(&[row("250000000001", "50.0")]);
        text.push_str("Cargo: Zootecnista (B4-16-A)\n");
        text.push_str(&row("250000000099", "10.0").join("\n"));
        let sheet = segment_objective(&text, &SectionMarkers::default(), &HeaderFilter::default())
            .unwrap();
        assert_eq!(sheet.candidates.len(), 1);
        assert_eq!(sheet.candidates[0].inscricao, "250000000001");
    }

    #[test]
    fn test_section_before_start_is_ignored() {
        let mut text = row("250000000077", "10.0").join("\n");
        text.push('\n');
        text.push_str(&sheet_text(&[row("250000000001", "50.0")]));
        let sheet = segment_objective(&text, &SectionMarkers::default(), &HeaderFilter::default())
            .unwrap();
        assert_eq!(sheet.candidates.len(), 1);
        assert_eq!(sheet.candidates[0].inscricao, "250000000001");
    }

    #[test]
    fn test_orphan_registration_is_dropped() {
        let values = ["250012345678", "250087654321", "10", "5", "4", "1", "Aprovado", "20"];
        let sheet = segment_values(&values);
        assert_eq!(sheet.candidates.len(), 1);
        assert_eq!(sheet.candidates[0].inscricao, "250087654321");
        assert_eq!(sheet.candidates[0].classificacao, "20");
        assert_eq!(sheet.skipped.orphans, 1);
        assert_eq!(sheet.skipped.trailing, 0);
    }

    #[test]
    fn test_stray_values_are_skipped() {
        let mut values = vec!["lixo", "3"];
        values.extend(row("250000000001", "50.0"));
        let sheet = segment_values(&values);
        assert_eq!(sheet.candidates.len(), 1);
        assert_eq!(sheet.skipped.stray, 2);
    }

    #[test]
    fn test_partial_tail_is_dropped() {
        let mut values = row("250000000001", "50.0");
        values.extend(["250000000002", "40", "20,00"]);
        let sheet = segment_values(&values);
        assert_eq!(sheet.candidates.len(), 1);
        assert_eq!(sheet.skipped.trailing, 3);
    }

    #[test]
    fn test_empty_section() {
        let sheet = segment_objective(
            "Cargo (B4-15-A)\n",
            &SectionMarkers::default(),
            &HeaderFilter::default(),
        )
        .unwrap();
        assert!(sheet.candidates.is_empty());
        assert!(sheet.skipped.is_clean());
    }

    #[test]
    fn test_custom_markers() {
        let markers = SectionMarkers {
            start: "<<".to_string(),
            end: ">>".to_string(),
        };
        let text = format!("<<\n{}\n>>\n", row("250000000001", "1.0").join("\n"));
        let sheet = segment_objective(&text, &markers, &HeaderFilter::default()).unwrap();
        assert_eq!(sheet.candidates.len(), 1);
    }
}
