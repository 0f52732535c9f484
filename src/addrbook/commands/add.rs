use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Name, Phone, Record};
use crate::store::ContactStore;
use tracing::debug;

/// Adds a contact, or extends an existing one with another phone.
///
/// Re-adding a known name never drops data: phones accumulate in the order
/// they were given.
pub fn run<S: ContactStore>(store: &mut S, name: Name, phone: Option<Phone>) -> Result<CmdResult> {
    let existing = store.get_record(&name)?;
    let created = existing.is_none();
    let mut record = existing.unwrap_or_else(|| Record::new(name));

    let mut result = CmdResult::default();
    result.add_message(if created {
        CmdMessage::success("Contact added.")
    } else {
        CmdMessage::success("Contact updated.")
    });

    if let Some(phone) = phone {
        if !record.add_phone(phone.clone()) {
            result.add_message(CmdMessage::info(format!(
                "{} already has phone {}",
                record.name(),
                phone
            )));
        }
    }

    store.save_record(&record)?;
    debug!(name = %record.name(), created, phones = record.phones().len(), "saved contact");

    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::BookFixture;
    use crate::store::memory::AddressBook;

    fn name(s: &str) -> Name {
        Name::parse(s).unwrap()
    }

    fn phone(s: &str) -> Phone {
        Phone::parse(s).unwrap()
    }

    #[test]
    fn creates_new_contact() {
        let mut book = AddressBook::new();
        let result = run(&mut book, name("Alice"), Some(phone("0123456789"))).unwrap();

        assert_eq!(result.messages[0].content, "Contact added.");
        let record = book.find(&name("Alice")).unwrap();
        assert_eq!(record.phones(), &[phone("0123456789")]);
    }

    #[test]
    fn creates_contact_without_phone() {
        let mut book = AddressBook::new();
        run(&mut book, name("Alice"), None).unwrap();

        assert!(book.find(&name("Alice")).unwrap().phones().is_empty());
    }

    #[test]
    fn adding_twice_accumulates_phones() {
        let mut book = AddressBook::new();
        run(&mut book, name("Alice"), Some(phone("1111111111"))).unwrap();
        let result = run(&mut book, name("Alice"), Some(phone("2222222222"))).unwrap();

        assert_eq!(result.messages[0].content, "Contact updated.");
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.find(&name("Alice")).unwrap().phones(),
            &[phone("1111111111"), phone("2222222222")]
        );
    }

    #[test]
    fn duplicate_phone_is_not_stored_twice() {
        let mut fixture = BookFixture::new().with_contact("Alice", &["1111111111"]);
        let result = run(&mut fixture.book, name("Alice"), Some(phone("1111111111"))).unwrap();

        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Info);
        assert_eq!(fixture.record("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn keeps_existing_birthday_when_extending() {
        let mut fixture = BookFixture::new().with_birthday("Alice", &[], "01.01.1990");
        run(&mut fixture.book, name("Alice"), Some(phone("1111111111"))).unwrap();

        let record = fixture.record("Alice").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1990");
        assert_eq!(record.phones().len(), 1);
    }
}
