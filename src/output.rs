//! CSV output

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::merge::MergedRecord;

/// Output columns, in order
pub const COLUMNS: [&str; 10] = [
    "inscricao",
    "total_acertos",
    "nota_conhecimentos_gerais",
    "nota_conhecimentos_especificos",
    "nota_prova_objetiva",
    "situacao_prova_objetiva",
    "classificacao",
    "nota_prova_discursiva",
    "nota_titulos",
    "soma",
];

/// Render a total score as the shortest decimal that round-trips,
/// always keeping a fractional part (`85.0`, `55.25`)
pub fn format_sum(value: f64) -> String {
    format!("{:?}", value)
}

fn row(record: &MergedRecord) -> [String; 10] {
    let c = &record.candidate;
    [
        c.inscricao.clone(),
        c.total_acertos.clone(),
        c.nota_conhecimentos_gerais.clone(),
        c.nota_conhecimentos_especificos.clone(),
        c.nota_prova_objetiva.clone(),
        c.situacao_prova_objetiva.clone(),
        c.classificacao.clone(),
        record.nota_prova_discursiva.clone(),
        record.nota_titulos.clone(),
        format_sum(record.soma),
    ]
}

/// Write the header row and one row per record to any writer
///
/// Rows end in `\r\n`.
pub fn write_records<W: Write>(writer: W, records: &[MergedRecord]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    csv.write_record(COLUMNS)?;
    for record in records {
        csv.write_record(row(record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the records to `path`, replacing any existing file
pub fn write_csv(path: &Path, records: &[MergedRecord]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_records(std::io::BufWriter::new(file), records)
}
