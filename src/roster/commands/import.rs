//! CSV import.
//!
//! The first line is a header and is discarded whatever it contains. Every following line must
//! be `name,surname,age`. Commas are never escaped, so a line with a comma inside a name simply
//! has the wrong number of fields.
//!
//! Bad lines are skipped and reported one by one; they never abort the import. Only a file that
//! cannot be read at all is fatal, and in that case the store is left exactly as it was.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::form::parse_age;
use crate::model::Person;
use crate::store::RecordStore;
use std::fs;
use std::path::Path;
use thiserror::Error;

const FIELD_COUNT: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportLineError {
    #[error("Invalid line format, expected 3 fields but found {found}: {line}")]
    FieldCount { found: usize, line: String },

    #[error("Invalid age {value:?}: {line}")]
    InvalidAge { value: String, line: String },

    #[error("{name} {surname} already exists.")]
    Duplicate { name: String, surname: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStatus {
    Imported(Person),
    Skipped(ImportLineError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number in the source text; the header is line 1.
    pub line: usize,
    pub status: LineStatus,
}

/// Per-line outcome of one import, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub lines: Vec<LineOutcome>,
}

impl ImportReport {
    pub fn imported(&self) -> impl Iterator<Item = &Person> {
        self.lines.iter().filter_map(|outcome| match &outcome.status {
            LineStatus::Imported(person) => Some(person),
            LineStatus::Skipped(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (usize, &ImportLineError)> {
        self.lines.iter().filter_map(|outcome| match &outcome.status {
            LineStatus::Skipped(err) => Some((outcome.line, err)),
            LineStatus::Imported(_) => None,
        })
    }

    pub fn imported_count(&self) -> usize {
        self.imported().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }
}

/// Parses a single data line. Does not look at the store, so duplicates are not detected here.
pub fn parse_line(line: &str) -> std::result::Result<Person, ImportLineError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ImportLineError::FieldCount {
            found: fields.len(),
            line: line.to_string(),
        });
    }

    let name = fields[0].trim();
    let surname = fields[1].trim();
    let age = parse_age(fields[2]).ok_or_else(|| ImportLineError::InvalidAge {
        value: fields[2].trim().to_string(),
        line: line.to_string(),
    })?;

    Ok(Person::new(name, surname, age))
}

/// Applies CSV text to the store and reports what happened to each data line.
///
/// Rows accepted earlier in the same text count as existing records for the duplicate check.
pub fn import_text<S: RecordStore>(store: &mut S, text: &str) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    for (idx, line) in text.lines().enumerate().skip(1) {
        let status = match parse_line(line) {
            Ok(person) if store.contains_identity(&person.name, &person.surname) => {
                LineStatus::Skipped(ImportLineError::Duplicate {
                    name: person.name,
                    surname: person.surname,
                })
            }
            Ok(person) => {
                store.add(person.clone())?;
                LineStatus::Imported(person)
            }
            Err(err) => LineStatus::Skipped(err),
        };
        report.lines.push(LineOutcome {
            line: idx + 1,
            status,
        });
    }

    Ok(report)
}

pub fn run<S: RecordStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let report = import_text(store, text)?;
    Ok(summarize(report))
}

/// Reads `path` in one go and imports it. An unreadable file aborts before the store is touched.
pub fn run_file<S: RecordStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(path).map_err(|source| RosterError::ImportFatal {
        path: path.to_path_buf(),
        source,
    })?;
    run(store, &text)
}

fn summarize(report: ImportReport) -> CmdResult {
    let mut result = CmdResult::default();

    for (line, err) in report.skipped() {
        result.add_message(CmdMessage::warning(format!("Line {}: {}", line, err)));
    }

    result.add_message(CmdMessage::success(format!(
        "Data imported: {} added, {} skipped",
        report.imported_count(),
        report.skipped_count()
    )));

    let imported = report.imported().cloned().collect();
    result
        .with_affected_people(imported)
        .with_import_report(report)
}
