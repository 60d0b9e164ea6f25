//! Joining the objective candidates with the auxiliary score tables

use crate::segment::{CandidateRecord, ScoreTable};

/// A candidate row extended with the discursive and titles scores
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub candidate: CandidateRecord,
    /// Discursive score, `""` when the candidate is not in that sheet
    pub nota_prova_discursiva: String,
    /// Titles score, `""` when the candidate is not in that sheet
    pub nota_titulos: String,
    /// Objective + discursive + titles, missing scores counted as zero
    pub soma: f64,
}

/// Parse a score for summing
///
/// Empty means "did not take part" and counts as zero. A value that is not
/// a decimal number also counts as zero, with a warning.
pub fn score_value(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }
    match value.replace(',', ".").parse::<f64>() {
        Ok(n) => n,
        Err(_) => {
            tracing::warn!(value, "score is not a number, counting it as zero");
            0.0
        }
    }
}

/// Look up every candidate in both tables and compute the total score
///
/// A lookup miss is not an error: the score is left empty.
pub fn merge(
    candidates: Vec<CandidateRecord>,
    discursiva: &ScoreTable,
    titulos: &ScoreTable,
) -> Vec<MergedRecord> {
    candidates
        .into_iter()
        .map(|candidate| {
            let nota_prova_discursiva = discursiva.score_for(&candidate.inscricao).to_string();
            let nota_titulos = titulos.score_for(&candidate.inscricao).to_string();
            let soma = score_value(&candidate.nota_prova_objetiva)
                + score_value(&nota_prova_discursiva)
                + score_value(&nota_titulos);
            MergedRecord {
                candidate,
                nota_prova_discursiva,
                nota_titulos,
                soma,
            }
        })
        .collect()
}
