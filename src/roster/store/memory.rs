use super::RecordStore;
use crate::error::{Result, RosterError};
use crate::model::Person;

/// Session storage. Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    people: Vec<Person>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<Vec<Person>> for InMemoryStore {
    fn from(people: Vec<Person>) -> Self {
        Self { people }
    }
}

impl RecordStore for InMemoryStore {
    fn add(&mut self, person: Person) -> Result<()> {
        self.people.push(person);
        Ok(())
    }

    fn replace_at(&mut self, position: usize, new: Person) -> Result<()> {
        let slot = self
            .people
            .get_mut(position)
            .ok_or_else(|| RosterError::PersonNotFound(format!("record #{}", position + 1)))?;
        *slot = new;
        Ok(())
    }

    fn remove_at(&mut self, position: usize) -> Result<Person> {
        if position >= self.people.len() {
            return Err(RosterError::PersonNotFound(format!("record #{}", position + 1)));
        }
        Ok(self.people.remove(position))
    }

    fn people(&self) -> &[Person] {
        &self.people
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_person(mut self, name: &str, surname: &str, age: i32) -> Self {
            self.store.add(Person::new(name, surname, age)).unwrap();
            self
        }

        /// Ana Lopez (30), Juan Perez (40), Luis Gomez (25), in that order.
        pub fn with_sample(self) -> Self {
            self.with_person("Ana", "Lopez", 30)
                .with_person("Juan", "Perez", 40)
                .with_person("Luis", "Gomez", 25)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    fn names(people: &[Person]) -> Vec<String> {
        people.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn add_appends_in_order_and_allows_duplicates() {
        let mut store = InMemoryStore::new();
        store.add(Person::new("Ana", "Lopez", 30)).unwrap();
        store.add(Person::new("Ana", "Lopez", 30)).unwrap();
        store.add(Person::new("Luis", "Gomez", 25)).unwrap();
        assert_eq!(names(store.people()), ["Ana Lopez", "Ana Lopez", "Luis Gomez"]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut store = StoreFixture::new().with_sample().store;
        let old = Person::new("Juan", "Perez", 40);
        store
            .replace(&old, Person::new("Juana", "Perez", 41))
            .unwrap();
        assert_eq!(names(store.people()), ["Ana Lopez", "Juana Perez", "Luis Gomez"]);
        assert_eq!(store.people()[1].age, 41);
    }

    #[test]
    fn replace_missing_is_an_error() {
        let mut store = StoreFixture::new().with_sample().store;
        let err = store
            .replace(&Person::new("Nobody", "Here", 1), Person::new("X", "Y", 2))
            .unwrap_err();
        assert!(matches!(err, RosterError::PersonNotFound(_)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_deletes_first_match_only() {
        let mut store = StoreFixture::new()
            .with_person("Ana", "Lopez", 30)
            .with_person("Luis", "Gomez", 25)
            .with_person("Ana", "Lopez", 30)
            .store;
        let removed = store.remove(&Person::new("Ana", "Lopez", 30)).unwrap();
        assert!(removed.is_some());
        assert_eq!(names(store.people()), ["Luis Gomez", "Ana Lopez"]);
    }

    #[test]
    fn positional_edits_pick_the_exact_duplicate() {
        let mut store = StoreFixture::new()
            .with_person("Ana", "Lopez", 30)
            .with_person("Luis", "Gomez", 25)
            .with_person("Ana", "Lopez", 30)
            .store;
        store.replace_at(2, Person::new("Eva", "Diaz", 50)).unwrap();
        assert_eq!(names(store.people()), ["Ana Lopez", "Luis Gomez", "Eva Diaz"]);

        let removed = store.remove_at(0).unwrap();
        assert_eq!(removed, Person::new("Ana", "Lopez", 30));
        assert_eq!(names(store.people()), ["Luis Gomez", "Eva Diaz"]);
    }

    #[test]
    fn positions_out_of_range_are_not_found() {
        let mut store = StoreFixture::new().with_sample().store;
        assert!(matches!(
            store.replace_at(3, Person::new("X", "Y", 1)),
            Err(RosterError::PersonNotFound(_))
        ));
        assert!(matches!(store.remove_at(7), Err(RosterError::PersonNotFound(_))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn matching_name_reports_store_positions() {
        let store = StoreFixture::new().with_sample().store;
        let positions: Vec<usize> = store.matching_name("lu").into_iter().map(|(i, _)| i).collect();
        assert_eq!(positions, [2]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = StoreFixture::new().with_sample().store;
        let before = store.people().to_vec();
        let removed = store.remove(&Person::new("Ana", "Lopez", 31)).unwrap();
        assert!(removed.is_none());
        assert_eq!(store.people(), before.as_slice());
    }

    #[test]
    fn filter_matches_substring_case_insensitively() {
        let store = StoreFixture::new().with_sample().store;
        assert_eq!(names(&store.filter_by_name("an")), ["Ana Lopez", "Juan Perez"]);
        assert_eq!(names(&store.filter_by_name("AN")), ["Ana Lopez", "Juan Perez"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn filter_looks_at_name_only() {
        let store = StoreFixture::new().with_sample().store;
        assert!(store.filter_by_name("lopez").is_empty());
    }

    #[test]
    fn empty_filter_matches_everyone() {
        let store = StoreFixture::new().with_sample().store;
        assert_eq!(store.filter_by_name("").len(), 3);
    }

    #[test]
    fn filter_handles_non_ascii_names() {
        let store = StoreFixture::new().with_person("Ángela", "Ruiz", 22).store;
        assert_eq!(store.filter_by_name("áng").len(), 1);
    }
}
