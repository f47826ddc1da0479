use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayPerson;
use crate::store::RecordStore;

use super::helpers::still_listed;

/// Removes the selected record from the position it was listed at.
///
/// If the store changed since the listing, the first equal record is removed instead, and a
/// selection that is gone entirely is a no-op.
pub fn run<S: RecordStore>(store: &mut S, selected: &DisplayPerson) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let person = &selected.person;

    let removed = if still_listed(store, selected) {
        Some(store.remove_at(selected.position)?)
    } else {
        store.remove(person)?
    };

    match removed {
        Some(removed) => {
            result.add_message(CmdMessage::success(format!("Person deleted: {}", removed)));
            result.affected_people.push(removed);
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "Nothing deleted: {} is not in the roster",
                person
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::person_at_row;
    use crate::index::Row;
    use crate::model::Person;
    use crate::store::memory::fixtures::StoreFixture;

    fn unlisted(person: Person) -> DisplayPerson {
        DisplayPerson {
            index: Row(1),
            position: 0,
            person,
        }
    }

    #[test]
    fn removes_person() {
        let mut store = StoreFixture::new().with_sample().store;
        let selected = person_at_row(&store, None, Row(2)).unwrap();
        let result = run(&mut store, &selected).unwrap();

        assert!(result.mutated());
        let names: Vec<_> = store.people().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Luis"]);
    }

    #[test]
    fn absent_person_is_noop() {
        let mut store = StoreFixture::new().with_sample().store;
        let before = store.people().to_vec();
        let result = run(&mut store, &unlisted(Person::new("Eva", "Diaz", 50))).unwrap();

        assert!(!result.mutated());
        assert_eq!(store.people(), before.as_slice());
    }

    #[test]
    fn removes_the_selected_row_among_equal_records() {
        let mut store = StoreFixture::new()
            .with_person("Ana", "Lopez", 30)
            .with_person("Luis", "Gomez", 25)
            .with_person("Ana", "Lopez", 30)
            .store;
        let selected = person_at_row(&store, None, Row(3)).unwrap();
        run(&mut store, &selected).unwrap();

        let names: Vec<_> = store.people().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Luis"]);
    }

    #[test]
    fn moved_selection_removes_by_value() {
        let mut store = StoreFixture::new().with_sample().store;
        run(&mut store, &unlisted(Person::new("Luis", "Gomez", 25))).unwrap();

        let names: Vec<_> = store.people().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Juan"]);
    }
}
