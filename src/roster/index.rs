//! Row numbering for rendered views.
//!
//! The shell shows the roster as a table, possibly narrowed by a name filter, and users pick a
//! record by its row number in what they currently see. Rows are 1-based and always relative to
//! the listed view, so row 2 of a filtered table is not row 2 of the full roster. Each listed
//! person also carries its position in the store, which is what edits and deletes act on.

use crate::model::Person;
use std::fmt;
use std::str::FromStr;

/// A 1-based row in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row(pub usize);

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Row {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Row(n)),
            _ => Err(format!("Invalid row: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPerson {
    pub index: Row,
    /// 0-based position in the store.
    pub position: usize,
    pub person: Person,
}

/// Numbers `(position, person)` pairs as rows of a view, in the given order.
pub fn index_people(people: Vec<(usize, Person)>) -> Vec<DisplayPerson> {
    people
        .into_iter()
        .enumerate()
        .map(|(i, (position, person))| DisplayPerson {
            index: Row(i + 1),
            position,
            person,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_start_at_one() {
        let rows = index_people(vec![
            (0, Person::new("Ana", "Lopez", 30)),
            (4, Person::new("Luis", "Gomez", 25)),
        ]);
        assert_eq!(rows[0].index, Row(1));
        assert_eq!(rows[1].index, Row(2));
        assert_eq!(rows[1].position, 4);
        assert_eq!(rows[1].person.name, "Luis");
    }

    #[test]
    fn parses_rows() {
        assert_eq!("3".parse::<Row>(), Ok(Row(3)));
        assert_eq!(" 12 ".parse::<Row>(), Ok(Row(12)));
        assert!("0".parse::<Row>().is_err());
        assert!("-1".parse::<Row>().is_err());
        assert!("p1".parse::<Row>().is_err());
    }
}
