//! Import reconciliation for delimited task records.
//!
//! Parses comma-delimited lines of the form `id,name,category[,completed]`
//! and applies them to a [`TaskStore`], resolving id collisions through a
//! caller-supplied decision. There is no quoting or escaping of embedded
//! delimiters, and no header row.

use std::io::BufRead;

use crate::db::TaskStore;
use crate::error::{Error, Result};

/// Resolution for a record whose id already exists in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    /// Insert the incoming record as a brand-new row, ignoring its id.
    MergeAsNew,
    /// Overwrite the existing row at the conflicting id in place.
    Replace,
    /// Skip the record entirely.
    Cancel,
}

/// One parsed import line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub completed: bool,
}

/// Outcome counts for one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Lines read from the source, including skipped ones.
    pub lines: usize,
    /// Rows inserted with a freshly assigned id.
    pub created: usize,
    /// Rows overwritten in place at their existing id.
    pub replaced: usize,
    /// Conflicting records the resolver declined.
    pub cancelled: usize,
    /// Lines dropped for having fewer than three fields.
    pub skipped_short: usize,
}

/// Reads lines from `reader` and merges them into `store`.
///
/// `resolve` is consulted once per record whose id is already present. The
/// run is not transactional: a failure on one record propagates to the
/// caller and aborts the remainder, but rows applied before it are kept.
pub fn import_tasks<S, R, F>(store: &S, reader: R, mut resolve: F) -> Result<ImportReport>
where
    S: TaskStore + ?Sized,
    R: BufRead,
    F: FnMut(&ImportRecord) -> ConflictDecision,
{
    let mut report = ImportReport::default();

    for line in reader.lines() {
        let line = line?;
        report.lines += 1;

        let Some(record) = parse_line(&line)? else {
            report.skipped_short += 1;
            tracing::debug!(line = report.lines, "skipping short import row");
            continue;
        };

        if !store.exists(record.id)? {
            // The imported id is discarded on this path; the store assigns
            // a fresh one and the row starts incomplete.
            store.create(&record.name, &record.category)?;
            report.created += 1;
            continue;
        }

        match resolve(&record) {
            ConflictDecision::MergeAsNew => {
                store.create(&record.name, &record.category)?;
                report.created += 1;
            }
            ConflictDecision::Replace => {
                store.update(record.id, &record.name, &record.category, record.completed)?;
                report.replaced += 1;
            }
            ConflictDecision::Cancel => {
                tracing::debug!(id = record.id, "import record cancelled");
                report.cancelled += 1;
            }
        }
    }

    Ok(report)
}

/// Splits one line into an [`ImportRecord`].
///
/// Returns `Ok(None)` for lines with fewer than three fields. An id field
/// that does not parse as an integer aborts the whole import; the
/// permissive short-row skip does not extend to malformed ids.
fn parse_line(line: &str) -> Result<Option<ImportRecord>> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 3 {
        return Ok(None);
    }

    let id: i64 = fields[0]
        .parse()
        .map_err(|_| Error::Format(format!("invalid task id {:?}", fields[0])))?;

    // Anything other than "true" (any case) reads as incomplete.
    let completed = fields
        .get(3)
        .is_some_and(|f| f.eq_ignore_ascii_case("true"));

    Ok(Some(ImportRecord {
        id,
        name: fields[1].to_string(),
        category: fields[2].to_string(),
        completed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_record() {
        let record = parse_line("3,Buy milk,Personal,TRUE").unwrap().unwrap();
        assert_eq!(
            record,
            ImportRecord {
                id: 3,
                name: "Buy milk".to_string(),
                category: "Personal".to_string(),
                completed: true,
            }
        );
    }

    #[test]
    fn completed_defaults_to_false_when_absent() {
        let record = parse_line("1,a,Work").unwrap().unwrap();
        assert!(!record.completed);
    }

    #[test]
    fn unparseable_completed_reads_as_false() {
        let record = parse_line("1,a,Work,yes").unwrap().unwrap();
        assert!(!record.completed);
    }

    #[test]
    fn short_rows_are_skipped() {
        assert!(parse_line("1,a").unwrap().is_none());
        assert!(parse_line("").unwrap().is_none());
    }

    #[test]
    fn malformed_id_is_a_format_error() {
        let err = parse_line("x,a,Work").unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn id_with_surrounding_whitespace_is_rejected() {
        let err = parse_line(" 1,a,Work").unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }
}
