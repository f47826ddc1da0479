//! Where session lines come from: a reedline editor on a terminal, or plain stdin lines when
//! input is piped (scripts, tests).

use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io::{self, BufRead};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C: abandon the current line or form.
    Interrupted,
    /// Ctrl-D or end of input.
    Closed,
}

pub trait LineSource {
    fn read(&mut self, prompt: &str) -> io::Result<Input>;
}

pub struct Terminal {
    editor: Reedline,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            editor: Reedline::create(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for Terminal {
    fn read(&mut self, prompt: &str) -> io::Result<Input> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(prompt.to_string()),
            DefaultPromptSegment::Empty,
        );
        Ok(match self.editor.read_line(&prompt)? {
            Signal::Success(line) => Input::Line(line),
            Signal::CtrlC => Input::Interrupted,
            _ => Input::Closed,
        })
    }
}

/// Reads one line per call and never shows a prompt.
pub struct Piped<R> {
    reader: R,
}

impl<R: BufRead> Piped<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for Piped<R> {
    fn read(&mut self, _prompt: &str) -> io::Result<Input> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(Input::Closed);
        }
        let line = buf.trim_end_matches(&['\n', '\r'][..]);
        Ok(Input::Line(line.to_string()))
    }
}

/// Splits a session line into words. Double quotes group words and may be empty (`""`).
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err("Unterminated quote".to_string());
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
