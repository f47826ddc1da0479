//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point the UI
//! Shell talks to.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Resolves rows** of the current (possibly filtered) view into listed records, which keep
//!   their store position so equal rows stay distinct
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, log or format anything. Every failure is returned exactly once and the
//! caller decides how to notify the user.
//!
//! ## Generic Over RecordStore
//!
//! `RosterApi<S: RecordStore>` is generic over the store, the binary uses
//! `RosterApi<InMemoryStore>`.

use crate::commands;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::form::{FormOutcome, PersonForm};
use crate::index::{DisplayPerson, Row};
use crate::model::Person;
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

/// The main API facade for roster operations.
pub struct RosterApi<S: RecordStore> {
    store: S,
    config_dir: PathBuf,
    file_ext: String,
}

impl<S: RecordStore> RosterApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self {
            store,
            config_dir,
            file_ext: RosterConfig::default().file_ext,
        }
    }

    pub fn with_file_ext(mut self, ext: impl Into<String>) -> Self {
        self.file_ext = ext.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    pub fn add_person(&mut self, person: Person) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, person)
    }

    pub fn edit_person(
        &mut self,
        selected: &DisplayPerson,
        new: Person,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, selected, new)
    }

    pub fn delete_person(&mut self, selected: &DisplayPerson) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, selected)
    }

    /// Applies a finished form: `Saved` adds (no `target`) or replaces `target`,
    /// `Cancelled` changes nothing and returns an empty result.
    pub fn apply_form(
        &mut self,
        target: Option<&DisplayPerson>,
        outcome: FormOutcome,
    ) -> Result<commands::CmdResult> {
        match (outcome, target) {
            (FormOutcome::Cancelled, _) => Ok(commands::CmdResult::default()),
            (FormOutcome::Saved(person), None) => self.add_person(person),
            (FormOutcome::Saved(person), Some(old)) => self.edit_person(old, person),
        }
    }

    /// A blank form for adding, or one pre-filled from the person at `row` for editing.
    pub fn form_for(&self, filter: Option<&str>, row: Option<Row>) -> Result<PersonForm> {
        match row {
            Some(row) => Ok(PersonForm::prefilled(&self.select(filter, row)?.person)),
            None => Ok(PersonForm::default()),
        }
    }

    pub fn list_people(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    /// The record shown at `row` of the view listed with `filter`.
    pub fn select(&self, filter: Option<&str>, row: Row) -> Result<DisplayPerson> {
        commands::helpers::person_at_row(&self.store, filter, row)
    }

    pub fn import_text(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, text)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run_file(&mut self.store, path)
    }

    pub fn export_text(&self) -> String {
        commands::export::run(&self.store)
    }

    pub fn export_file(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run_file(&self.store, path, &self.file_ext)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.file_ext = config.file_ext.clone();
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::import::{ImportLineError, ImportReport, LineOutcome, LineStatus};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
