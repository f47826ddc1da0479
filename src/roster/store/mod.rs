//! # Storage Layer
//!
//! The [`RecordStore`] trait is the ordered collection of people a session works on.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec` in insertion order. This is the session store; there is
//!   no on-disk backend, a roster survives a session only through CSV export.
//!
//! ## Ordering and Equality
//!
//! Order is insertion order and every operation preserves it. Records have no identity field and
//! value duplicates are allowed here; only the importer rejects `(name, surname)` duplicates.
//!
//! A record is addressed either by its position (`replace_at`, `remove_at`) or by value
//! (`replace`, `remove`), which acts on the first equal record. Row selection in the shell
//! resolves to a position, so two equal rows stay distinguishable.

use crate::error::{Result, RosterError};
use crate::model::Person;

pub mod memory;

pub trait RecordStore {
    /// Append a person at the end.
    fn add(&mut self, person: Person) -> Result<()>;

    /// Substitute the record at `position` with `new`.
    fn replace_at(&mut self, position: usize, new: Person) -> Result<()>;

    /// Remove and return the record at `position`.
    fn remove_at(&mut self, position: usize) -> Result<Person>;

    /// All records in order.
    fn people(&self) -> &[Person];

    fn position_of(&self, person: &Person) -> Option<usize> {
        self.people().iter().position(|p| p == person)
    }

    /// Substitute the first record equal to `old` with `new`, keeping its position.
    fn replace(&mut self, old: &Person, new: Person) -> Result<()> {
        let position = self
            .position_of(old)
            .ok_or_else(|| RosterError::PersonNotFound(old.to_string()))?;
        self.replace_at(position, new)
    }

    /// Remove the first record equal to `person`. Absent records are a no-op (`Ok(None)`).
    fn remove(&mut self, person: &Person) -> Result<Option<Person>> {
        match self.position_of(person) {
            Some(position) => self.remove_at(position).map(Some),
            None => Ok(None),
        }
    }

    /// Records whose name contains `term`, ignoring case, with their positions.
    fn matching_name(&self, term: &str) -> Vec<(usize, &Person)> {
        let term = term.to_lowercase();
        self.people()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Records whose name contains `term`, ignoring case. Never mutates the store.
    fn filter_by_name(&self, term: &str) -> Vec<Person> {
        self.matching_name(term)
            .into_iter()
            .map(|(_, p)| p.clone())
            .collect()
    }

    fn contains_identity(&self, name: &str, surname: &str) -> bool {
        self.people().iter().any(|p| p.same_identity(name, surname))
    }

    fn len(&self) -> usize {
        self.people().len()
    }

    fn is_empty(&self) -> bool {
        self.people().is_empty()
    }
}
