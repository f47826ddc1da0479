use crate::error::{Result, RosterError};
use crate::index::{DisplayPerson, Row};
use crate::store::RecordStore;

use super::list;

/// Resolves a row of the view produced by `list::run(store, filter)` to the person shown there
/// and its position in the store.
pub fn person_at_row<S: RecordStore>(
    store: &S,
    filter: Option<&str>,
    row: Row,
) -> Result<DisplayPerson> {
    list::run(store, filter)?
        .listed_people
        .into_iter()
        .find(|dp| dp.index == row)
        .ok_or_else(|| RosterError::Api("No person selected.".to_string()))
}

/// True while `selected` still sits at the position it was listed at.
pub fn still_listed<S: RecordStore>(store: &S, selected: &DisplayPerson) -> bool {
    store.people().get(selected.position) == Some(&selected.person)
}
