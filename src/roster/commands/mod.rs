use crate::config::RosterConfig;
use crate::index::DisplayPerson;
use crate::model::Person;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;

pub use import::ImportReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A notification for the user. The shell decides how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_people: Vec<Person>,
    pub listed_people: Vec<DisplayPerson>,
    pub import_report: Option<ImportReport>,
    pub written_path: Option<PathBuf>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_people(mut self, people: Vec<Person>) -> Self {
        self.affected_people = people;
        self
    }

    pub fn with_listed_people(mut self, people: Vec<DisplayPerson>) -> Self {
        self.listed_people = people;
        self
    }

    pub fn with_import_report(mut self, report: ImportReport) -> Self {
        self.import_report = Some(report);
        self
    }

    pub fn with_written_path(mut self, path: PathBuf) -> Self {
        self.written_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when at least one record was added, replaced or removed.
    pub fn mutated(&self) -> bool {
        !self.affected_people.is_empty()
    }
}
