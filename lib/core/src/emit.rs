// CSV output for query results
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::query::{format_cutoff, Query};
use crate::record::ResponseSchema;

/// Destination of one run's results.
///
/// The name depends only on the date and the query parameters, so a second
/// run on the same day with the same parameters overwrites the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFile {
    path: PathBuf,
}

impl ResultFile {
    pub fn new<P: AsRef<Path>>(dir: P, query: &Query, date: NaiveDate) -> Self {
        Self {
            path: dir.as_ref().join(Self::file_name(query, date)),
        }
    }

    /// `{YYMMDD}_{uniprot}_{cutoff}nM.csv` or `{YYMMDD}_targetSearchByCpd_{cutoff}nM.csv`
    pub fn file_name(query: &Query, date: NaiveDate) -> String {
        let stamp = date.format("%y%m%d");
        let cutoff = format_cutoff(query.cutoff());
        match query {
            Query::ByTarget { uniprot_id, .. } => format!("{}_{}_{}nM.csv", stamp, uniprot_id, cutoff),
            Query::ByCompound { .. } => format!("{}_targetSearchByCpd_{}nM.csv", stamp, cutoff),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write the header and one row per record, replacing any existing file.
/// Returns the number of data rows written.
pub fn write_csv<R: ResponseSchema>(path: &Path, records: &[R]) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;

    writer.write_record(R::HEADER)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;

    debug!("Wrote {} rows to {:?}", records.len(), path);
    Ok(records.len())
}

/// The line printed after a successful run
pub fn confirmation_message(path: &Path) -> Result<String> {
    let absolute = fs::canonicalize(path)?;
    Ok(format!("Results have been saved to {}!", absolute.display()))
}
