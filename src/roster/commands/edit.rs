use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayPerson;
use crate::model::Person;
use crate::store::RecordStore;

use super::helpers::still_listed;

/// Replaces the selected record with `new`, at the exact position it was listed at.
///
/// If the store changed since the listing, the first record equal to the selected one is
/// replaced instead; a selection that is gone entirely surfaces as `PersonNotFound`.
pub fn run<S: RecordStore>(
    store: &mut S,
    selected: &DisplayPerson,
    new: Person,
) -> Result<CmdResult> {
    if still_listed(store, selected) {
        store.replace_at(selected.position, new.clone())?;
    } else {
        store.replace(&selected.person, new.clone())?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Person updated: {}", new)));
    Ok(result.with_affected_people(vec![new]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::person_at_row;
    use crate::error::RosterError;
    use crate::index::Row;
    use crate::store::memory::fixtures::StoreFixture;

    fn names<S: RecordStore>(store: &S) -> Vec<String> {
        store.people().iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn replaces_at_same_position() {
        let mut store = StoreFixture::new().with_sample().store;
        let selected = person_at_row(&store, None, Row(1)).unwrap();
        run(&mut store, &selected, Person::new("Ana", "Lopez", 31)).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.people()[0].age, 31);
        assert_eq!(store.people()[1].name, "Juan");
    }

    #[test]
    fn edits_the_selected_row_among_equal_records() {
        let mut store = StoreFixture::new()
            .with_person("Ana", "Lopez", 30)
            .with_person("Luis", "Gomez", 25)
            .with_person("Ana", "Lopez", 30)
            .store;
        let selected = person_at_row(&store, None, Row(3)).unwrap();
        run(&mut store, &selected, Person::new("Eva", "Diaz", 50)).unwrap();

        assert_eq!(names(&store), ["Ana Lopez", "Luis Gomez", "Eva Diaz"]);
    }

    #[test]
    fn moved_selection_falls_back_to_value() {
        let mut store = StoreFixture::new().with_sample().store;
        let selected = person_at_row(&store, None, Row(3)).unwrap();
        store.remove_at(0).unwrap();
        run(&mut store, &selected, Person::new("Luis", "Gomez", 26)).unwrap();

        assert_eq!(names(&store), ["Juan Perez", "Luis Gomez"]);
        assert_eq!(store.people()[1].age, 26);
    }

    #[test]
    fn stale_selection_is_reported() {
        let mut store = StoreFixture::new().with_sample().store;
        let selected = DisplayPerson {
            index: Row(1),
            position: 0,
            person: Person::new("Ana", "Lopez", 99),
        };
        let err = run(&mut store, &selected, Person::new("Ana", "Lopez", 31)).unwrap_err();
        assert!(matches!(err, RosterError::PersonNotFound(_)));
        assert_eq!(store.people()[0].age, 30);
    }
}
