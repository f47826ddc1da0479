//! The interactive session: read a line, dispatch it to the API, print what happened.
//!
//! Every command that changes the roster is followed by a redraw of the current view, which is
//! the whole roster or the part of it matching the active name filter.

use super::form::{inline_form, run_form};
use super::input::{split_line, Input, LineSource};
use super::render::{print_messages, print_people};
use super::setup::{SessionCommand, SessionLine};
use chrono::Local;
use clap::Parser;
use roster::api::{CmdMessage, CmdResult, RosterApi};
use roster::error::Result;
use roster::form::FormOutcome;
use roster::index::DisplayPerson;
use roster::store::memory::InMemoryStore;
use roster::store::RecordStore;
use std::path::PathBuf;
use tracing::{debug, info};

enum Flow {
    Continue,
    Quit,
}

pub struct Session<L: LineSource> {
    api: RosterApi<InMemoryStore>,
    input: L,
    filter: Option<String>,
}

impl<L: LineSource> Session<L> {
    pub fn new(api: RosterApi<InMemoryStore>, input: L) -> Self {
        Self {
            api,
            input,
            filter: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        println!("Type `help` for commands, `quit` to leave.");

        loop {
            let line = match self.input.read(&self.prompt())? {
                Input::Line(line) => line,
                Input::Interrupted => continue,
                Input::Closed => break,
            };

            let tokens = match split_line(&line) {
                Ok(tokens) => tokens,
                Err(e) => {
                    print_messages(&[CmdMessage::error(e)]);
                    continue;
                }
            };
            if tokens.is_empty() {
                continue;
            }

            let command = match SessionLine::try_parse_from(&tokens) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    print!("{}", e);
                    continue;
                }
            };

            debug!(?command, "dispatching");
            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
            }
        }

        info!(people = self.api.store().people().len(), "session ended");
        Ok(())
    }

    /// Imports `path` before the first prompt. A fatal import is reported, not raised.
    pub fn preload(&mut self, path: PathBuf) -> Result<()> {
        match self.api.import_file(&path) {
            Ok(result) => self.finish(result),
            Err(e) => {
                print_messages(&[CmdMessage::error(e.to_string())]);
                Ok(())
            }
        }
    }

    fn prompt(&self) -> String {
        match &self.filter {
            Some(term) => format!("roster [{}]", term),
            None => "roster".to_string(),
        }
    }

    fn dispatch(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::List => self.render()?,
            SessionCommand::Filter { term } => {
                self.filter = term.filter(|t| !t.is_empty());
                self.render()?;
            }
            SessionCommand::Add { fields } => {
                let outcome = if fields.is_empty() {
                    run_form(&mut self.input, Default::default())?
                } else {
                    inline_form(&fields)?
                };
                self.apply(None, outcome)?;
            }
            SessionCommand::Edit { row, fields } => {
                let filter = self.filter.as_deref();
                let old = self.api.select(filter, row)?;
                let outcome = if fields.is_empty() {
                    let form = self.api.form_for(filter, Some(row))?;
                    run_form(&mut self.input, form)?
                } else {
                    inline_form(&fields)?
                };
                self.apply(Some(old), outcome)?;
            }
            SessionCommand::Delete { row } => {
                let selected = self.api.select(self.filter.as_deref(), row)?;
                let result = self.api.delete_person(&selected)?;
                self.finish(result)?;
            }
            SessionCommand::Import { file } => {
                info!(path = %file.display(), "importing");
                let result = self.api.import_file(&file)?;
                self.finish(result)?;
            }
            SessionCommand::Export { file } => {
                let path = file.unwrap_or_else(|| self.default_export_path());
                info!(path = %path.display(), "exporting");
                let result = self.api.export_file(&path)?;
                self.finish(result)?;
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn apply(&mut self, target: Option<DisplayPerson>, outcome: FormOutcome) -> Result<()> {
        if outcome == FormOutcome::Cancelled {
            print_messages(&[CmdMessage::info("Cancelled, nothing changed.")]);
            return Ok(());
        }
        let result = self.api.apply_form(target.as_ref(), outcome)?;
        self.finish(result)
    }

    /// Prints the notifications of a command and redraws the view if anything changed.
    fn finish(&mut self, result: CmdResult) -> Result<()> {
        print_messages(&result.messages);
        if result.mutated() {
            self.render()?;
        }
        Ok(())
    }

    fn render(&self) -> Result<()> {
        let filter = self.filter.as_deref();
        let result = self.api.list_people(filter)?;
        print_people(&result.listed_people, filter);
        Ok(())
    }

    fn default_export_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "personas-{}{}",
            Local::now().format("%Y-%m-%d"),
            self.api.file_ext()
        ))
    }
}
