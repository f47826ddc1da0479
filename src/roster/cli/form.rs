//! The edit form as a blocking prompt sequence.
//!
//! Each field is asked in turn, showing its current value; an empty answer keeps it. A form that
//! fails validation is shown again with the answers given so far. Ctrl-C, Ctrl-D or the end of
//! input cancels, which is reported as [`FormOutcome::Cancelled`] and never as an error.

use super::input::{Input, LineSource};
use super::render::print_messages;
use roster::api::CmdMessage;
use roster::error::{Result, RosterError};
use roster::form::{FormOutcome, PersonForm};
use std::io;

pub fn run_form<L: LineSource>(input: &mut L, initial: PersonForm) -> io::Result<FormOutcome> {
    let mut form = initial;

    loop {
        let Some(name) = ask(input, "Name", &form.name)? else {
            return Ok(form.cancel());
        };
        let Some(surname) = ask(input, "Surname", &form.surname)? else {
            return Ok(form.cancel());
        };
        let Some(age) = ask(input, "Age", &form.age)? else {
            return Ok(form.cancel());
        };

        form = PersonForm::new(name, surname, age);
        match form.submit() {
            Ok(outcome) => return Ok(outcome),
            Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        }
    }
}

/// Form filled from words typed on the command line: `NAME SURNAME AGE`.
pub fn inline_form(fields: &[String]) -> Result<FormOutcome> {
    match fields {
        [name, surname, age] => Ok(PersonForm::new(name, surname, age).submit()?),
        _ => Err(RosterError::Api(format!(
            "Expected NAME SURNAME AGE, got {} field(s)",
            fields.len()
        ))),
    }
}

fn ask<L: LineSource>(input: &mut L, label: &str, current: &str) -> io::Result<Option<String>> {
    let prompt = if current.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, current)
    };

    Ok(match input.read(&prompt)? {
        Input::Line(line) if line.trim().is_empty() => Some(current.to_string()),
        Input::Line(line) => Some(line),
        Input::Interrupted | Input::Closed => None,
    })
}
