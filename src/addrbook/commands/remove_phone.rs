use crate::commands::{contact_not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Name, Phone};
use crate::store::ContactStore;
use tracing::debug;

pub fn run<S: ContactStore>(store: &mut S, name: &Name, phone: &Phone) -> Result<CmdResult> {
    let Some(mut record) = store.get_record(name)? else {
        return Ok(CmdResult::default().with_message(contact_not_found(name)));
    };

    if !record.remove_phone(phone) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Phone {} not found for {}",
            phone, name
        ))));
    }

    store.save_record(&record)?;
    debug!(%name, %phone, "phone removed");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Phone {} removed from {}", phone, name)))
        .with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    fn name(s: &str) -> Name {
        Name::parse(s).unwrap()
    }

    fn phone(s: &str) -> Phone {
        Phone::parse(s).unwrap()
    }

    #[test]
    fn removes_one_phone() {
        let mut fixture = BookFixture::new().with_contact("Alice", &["1111111111", "2222222222"]);
        let result = run(&mut fixture.book, &name("Alice"), &phone("1111111111")).unwrap();

        assert_eq!(result.messages[0].content, "Phone 1111111111 removed from Alice");
        assert_eq!(fixture.record("Alice").unwrap().phones(), &[phone("2222222222")]);
    }

    #[test]
    fn unknown_phone_is_reported() {
        let mut fixture = BookFixture::new().with_contact("Alice", &["1111111111"]);
        let result = run(&mut fixture.book, &name("Alice"), &phone("2222222222")).unwrap();

        assert!(result.has_warnings());
        assert_eq!(fixture.record("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn missing_contact() {
        let mut fixture = BookFixture::new();
        let result = run(&mut fixture.book, &name("Alice"), &phone("1111111111")).unwrap();

        assert_eq!(result.messages[0].content, "Contact Alice not found");
    }
}
