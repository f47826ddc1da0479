use std::fmt;

/// One row of the roster.
///
/// People carry no identity field. Two values are the same record when every field matches;
/// the importer additionally treats the `(name, surname)` pair as identity when rejecting
/// duplicates, see [`Person::same_identity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub surname: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age,
        }
    }

    pub fn same_identity(&self, name: &str, surname: &str) -> bool {
        self.name == name && self.surname == surname
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.surname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_full_name() {
        assert_eq!(Person::new("Ana", "Lopez", 30).to_string(), "Ana Lopez");
    }

    #[test]
    fn identity_ignores_age() {
        let person = Person::new("Ana", "Lopez", 30);
        assert!(person.same_identity("Ana", "Lopez"));
        assert!(!person.same_identity("ana", "Lopez"));
        assert!(!person.same_identity("Ana", "Perez"));
    }
}
