use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Person;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S, person: Person) -> Result<CmdResult> {
    store.add(person.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Person added: {}", person)));
    Ok(result.with_affected_people(vec![person]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn appends_without_uniqueness_check() {
        let mut store = StoreFixture::new().with_sample().store;
        let result = run(&mut store, Person::new("Ana", "Lopez", 30)).unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.people()[3], Person::new("Ana", "Lopez", 30));
        assert!(result.mutated());
        assert_eq!(result.messages[0].content, "Person added: Ana Lopez");
    }
}
