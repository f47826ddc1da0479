//! Edit form validation.
//!
//! The form holds the three raw text fields exactly as the user typed them. It can start empty
//! (adding) or pre-filled from an existing [`Person`] (editing). Submitting either yields a new
//! `Person` or a [`ValidationError`]; the form never touches the store, the caller decides
//! whether the result is appended or replaces the selected record.

use crate::model::Person;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name and surname are required.")]
    MissingRequired,

    #[error("Age must be an integer.")]
    InvalidAge(String),
}

/// Result of running the form to completion.
///
/// `Cancelled` is not an error: the user closed the form and nothing must change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Saved(Person),
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub name: String,
    pub surname: String,
    pub age: String,
}

impl PersonForm {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age: age.into(),
        }
    }

    /// Form for edit mode, fields loaded from the selected person.
    pub fn prefilled(person: &Person) -> Self {
        Self::new(
            person.name.clone(),
            person.surname.clone(),
            person.age.to_string(),
        )
    }

    pub fn validate(&self) -> Result<Person, ValidationError> {
        validate(&self.name, &self.surname, &self.age)
    }

    pub fn submit(&self) -> Result<FormOutcome, ValidationError> {
        self.validate().map(FormOutcome::Saved)
    }

    pub fn cancel(&self) -> FormOutcome {
        FormOutcome::Cancelled
    }
}

/// Validates raw field text into a [`Person`].
///
/// Required fields are checked before the age, so a form that is wrong on both counts reports
/// the missing fields.
pub fn validate(name: &str, surname: &str, age: &str) -> Result<Person, ValidationError> {
    let name = name.trim();
    let surname = surname.trim();
    if name.is_empty() || surname.is_empty() {
        return Err(ValidationError::MissingRequired);
    }

    let age = parse_age(age).ok_or_else(|| ValidationError::InvalidAge(age.to_string()))?;
    Ok(Person::new(name, surname, age))
}

/// Base-10 integer in the `i32` range, surrounding whitespace ignored.
pub fn parse_age(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fields_produce_trimmed_person() {
        let person = validate("  Ana ", "Lopez\t", "30").unwrap();
        assert_eq!(person, Person::new("Ana", "Lopez", 30));
    }

    #[test]
    fn accepts_negative_and_signed_ages() {
        assert_eq!(validate("A", "B", "-4").unwrap().age, -4);
        assert_eq!(validate("A", "B", "+7").unwrap().age, 7);
        assert_eq!(validate("A", "B", " 12 ").unwrap().age, 12);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            validate("", "Lopez", "30"),
            Err(ValidationError::MissingRequired)
        );
        assert_eq!(
            validate("   ", "Lopez", "30"),
            Err(ValidationError::MissingRequired)
        );
    }

    #[test]
    fn empty_surname_is_rejected() {
        assert_eq!(
            validate("Ana", "", "30"),
            Err(ValidationError::MissingRequired)
        );
    }

    #[test]
    fn missing_fields_win_over_bad_age() {
        assert_eq!(validate("", "", "abc"), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn non_integer_age_is_rejected() {
        for bad in ["abc", "", "3.5", "1e3", "99999999999", "0x10"] {
            assert!(
                matches!(validate("Ana", "Lopez", bad), Err(ValidationError::InvalidAge(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn prefilled_form_round_trips_person() {
        let person = Person::new("Juan", "Perez", 40);
        let form = PersonForm::prefilled(&person);
        assert_eq!(form.age, "40");
        assert_eq!(form.submit(), Ok(FormOutcome::Saved(person)));
    }

    #[test]
    fn cancel_yields_no_person() {
        let form = PersonForm::new("Ana", "Lopez", "30");
        assert_eq!(form.cancel(), FormOutcome::Cancelled);
    }

    #[test]
    fn invalid_submit_is_not_a_cancel() {
        let form = PersonForm::new("Ana", "Lopez", "old");
        assert!(form.submit().is_err());
    }
}
