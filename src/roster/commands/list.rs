use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_people;
use crate::store::RecordStore;

/// Lists the roster, narrowed to names containing `filter` when one is given.
///
/// An empty filter lists everyone. The term is matched as typed, spaces included.
pub fn run<S: RecordStore>(store: &S, filter: Option<&str>) -> Result<CmdResult> {
    let people = match normalize_filter(filter) {
        Some(term) => store
            .matching_name(term)
            .into_iter()
            .map(|(position, p)| (position, p.clone()))
            .collect(),
        None => store.people().iter().cloned().enumerate().collect(),
    };

    Ok(CmdResult::default().with_listed_people(index_people(people)))
}

pub fn normalize_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|term| !term.is_empty())
}
