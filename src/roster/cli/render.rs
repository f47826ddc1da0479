use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::config::RosterConfig;
use roster::index::DisplayPerson;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 4] = ["#", "Name", "Surname", "Age"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_people(people: &[DisplayPerson], filter: Option<&str>) {
    print!("{}", render_people(people, filter));
}

pub(super) fn print_config(config: &RosterConfig) {
    for key in RosterConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Renders the view as an aligned table, one person per line, ending with a newline.
pub(super) fn render_people(people: &[DisplayPerson], filter: Option<&str>) -> String {
    if people.is_empty() {
        return match filter {
            Some(term) => format!("No people found matching \"{}\".\n", term),
            None => "No people found.\n".to_string(),
        };
    }

    let rows: Vec<[String; 4]> = people
        .iter()
        .map(|dp| {
            [
                dp.index.to_string(),
                dp.person.name.clone(),
                dp.person.surname.clone(),
                dp.person.age.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (h, w))| align(h, w, col))
        .collect();
    out.push_str(&format!("{}\n", header.join(COLUMN_GAP).trim_end().bold()));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(col, (cell, w))| {
                let cell = align(cell, w, col);
                if col == 0 {
                    cell.yellow().to_string()
                } else {
                    cell
                }
            })
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }

    if let Some(term) = filter {
        out.push_str(&format!(
            "{}\n",
            format!("Filtered by \"{}\"", term).dimmed()
        ));
    }
    out
}

/// Numbers (row and age) are right-aligned, text is left-aligned.
fn align(cell: &str, width: usize, col: usize) -> String {
    let padding = " ".repeat(width.saturating_sub(cell.width()));
    if col == 0 || col == 3 {
        format!("{}{}", padding, cell)
    } else {
        format!("{}{}", cell, padding)
    }
}
