//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every address book operation, whatever UI is driving it.
//!
//! ## Role and Responsibilities
//!
//! - **Validates inputs**: raw strings become [`Name`], [`Phone`] and [`Birthday`]
//!   here. A value that fails its rules aborts the call with an error before any
//!   command runs, so a rejected operation never touches the store.
//! - **Looks up the contact first** for operations on an existing contact
//!   (`change`, `add-birthday`, `remove-phone`): an unknown name is reported as
//!   not found, whatever the other arguments look like.
//! - **Dispatches** to the matching `commands::*::run`.
//! - **Returns structured types** (`Result<CmdResult>`), never display strings.
//!
//! Business rules (not-found handling, phone accumulation) belong to the
//! commands, and the clock belongs to the caller: `birthdays` takes `today`.
//!
//! ## Generic Over ContactStore
//!
//! `AddressBookApi<S: ContactStore>` is generic over the storage backend so the
//! same facade serves the CLI and the tests.

use crate::commands;
use crate::config::BookConfig;
use crate::error::Result;
use crate::model::{Birthday, Name, Phone};
use crate::store::ContactStore;
use chrono::NaiveDate;
use tracing::debug;

pub struct AddressBookApi<S: ContactStore> {
    store: S,
    config: BookConfig,
}

impl<S: ContactStore> AddressBookApi<S> {
    pub fn new(store: S, config: BookConfig) -> Self {
        Self { store, config }
    }

    pub fn add_contact(&mut self, name: &str, phone: Option<&str>) -> Result<CmdResult> {
        let name = Name::parse(name)?;
        let phone = phone.map(Phone::parse).transpose()?;
        debug!(%name, "add");
        commands::add::run(&mut self.store, name, phone)
    }

    pub fn change_phone(&mut self, name: &str, old_phone: &str, new_phone: &str) -> Result<CmdResult> {
        let name = Name::parse(name)?;
        if let Some(missing) = self.require_contact(&name)? {
            return Ok(missing);
        }
        let old_phone = Phone::parse(old_phone)?;
        let new_phone = Phone::parse(new_phone)?;
        debug!(%name, "change");
        commands::change::run(&mut self.store, &name, &old_phone, new_phone)
    }

    pub fn show_phone(&self, name: &str) -> Result<CmdResult> {
        let name = Name::parse(name)?;
        commands::phone::run(&self.store, &name)
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        commands::all::run(&self.store)
    }

    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        let name = Name::parse(name)?;
        if let Some(missing) = self.require_contact(&name)? {
            return Ok(missing);
        }
        let birthday = Birthday::parse(date)?;
        debug!(%name, "add-birthday");
        commands::add_birthday::run(&mut self.store, &name, birthday)
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        let name = Name::parse(name)?;
        commands::show_birthday::run(&self.store, &name)
    }

    pub fn birthdays(&self, today: NaiveDate) -> Result<CmdResult> {
        debug!(%today, window_days = self.config.window_days, "birthdays");
        commands::birthdays::run(&self.store, today, self.config.window_days)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let name = Name::parse(name)?;
        debug!(%name, "delete");
        commands::delete::run(&mut self.store, &name)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let name = Name::parse(name)?;
        if let Some(missing) = self.require_contact(&name)? {
            return Ok(missing);
        }
        let phone = Phone::parse(phone)?;
        debug!(%name, "remove-phone");
        commands::remove_phone::run(&mut self.store, &name, &phone)
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// The not-found result when `name` is unknown, `None` when it exists.
    fn require_contact(&self, name: &Name) -> Result<Option<CmdResult>> {
        if self.store.get_record(name)?.is_some() {
            return Ok(None);
        }
        debug!(%name, "contact not found");
        Ok(Some(
            CmdResult::default().with_message(commands::contact_not_found(name)),
        ))
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddrBookError;
    use crate::store::memory::AddressBook;

    fn api() -> AddressBookApi<AddressBook> {
        AddressBookApi::new(AddressBook::new(), BookConfig::default())
    }

    fn first_message(result: &CmdResult) -> &str {
        &result.messages[0].content
    }

    #[test]
    fn invalid_phone_aborts_add() {
        let mut api = api();
        let err = api.add_contact("Alice", Some("12345")).unwrap_err();

        assert!(matches!(err, AddrBookError::InvalidPhone(_)));
        assert!(api.show_all().unwrap().listed_records.is_empty());
    }

    #[test]
    fn invalid_new_phone_aborts_change() {
        let mut api = api();
        api.add_contact("Alice", Some("1111111111")).unwrap();

        let err = api.change_phone("Alice", "1111111111", "abc").unwrap_err();
        assert!(matches!(err, AddrBookError::InvalidPhone(_)));

        assert_eq!(
            first_message(&api.show_phone("Alice").unwrap()),
            "Alice's phone number: 1111111111"
        );
    }

    #[test]
    fn change_on_unknown_contact_is_not_found_before_phone_checks() {
        let mut api = api();

        let result = api.change_phone("Ghost", "1111111111", "bad").unwrap();
        assert_eq!(first_message(&result), "Contact Ghost not found");
        assert_eq!(result.messages[0].level, MessageLevel::Warning);

        let result = api.change_phone("Ghost", "bad", "2222222222").unwrap();
        assert_eq!(first_message(&result), "Contact Ghost not found");
        assert!(api.show_all().unwrap().listed_records.is_empty());
    }

    #[test]
    fn invalid_birthday_aborts_add_birthday() {
        let mut api = api();
        api.add_contact("Alice", None).unwrap();

        let err = api.add_birthday("Alice", "1990-03-05").unwrap_err();
        assert!(matches!(err, AddrBookError::InvalidBirthday(_)));

        assert_eq!(
            first_message(&api.show_birthday("Alice").unwrap()),
            "No birthday set for Alice"
        );
    }

    #[test]
    fn add_birthday_on_unknown_contact_is_not_found_before_date_checks() {
        let mut api = api();

        let result = api.add_birthday("Ghost", "bad-date").unwrap();
        assert_eq!(first_message(&result), "Contact Ghost not found");
        assert!(result.affected_records.is_empty());
        assert!(api.show_all().unwrap().listed_records.is_empty());
    }

    #[test]
    fn remove_phone_on_unknown_contact_is_not_found() {
        let mut api = api();

        let result = api.remove_phone("Ghost", "12").unwrap();
        assert_eq!(first_message(&result), "Contact Ghost not found");
    }

    #[test]
    fn birthdays_uses_configured_window() {
        let config = BookConfig::default().with_window_days(30);
        let mut api = AddressBookApi::new(AddressBook::new(), config);
        api.add_contact("Alice", None).unwrap();
        api.add_birthday("Alice", "25.05.1990").unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let result = api.birthdays(today).unwrap();
        assert_eq!(result.upcoming.len(), 1);
        assert_eq!(result.upcoming[0].days_until, 15);
    }

    #[test]
    fn dispatches_lookup_commands() {
        let mut api = api();
        api.add_contact("Alice", Some("1111111111")).unwrap();
        api.add_birthday("Alice", "05.03.1990").unwrap();

        assert_eq!(
            first_message(&api.show_phone("Alice").unwrap()),
            "Alice's phone number: 1111111111"
        );
        assert_eq!(
            first_message(&api.show_birthday("Alice").unwrap()),
            "Alice's birthday: 05.03.1990"
        );
        assert_eq!(api.show_all().unwrap().listed_records.len(), 1);

        api.remove_phone("Alice", "1111111111").unwrap();
        assert_eq!(
            first_message(&api.show_phone("Alice").unwrap()),
            "No phone number set for Alice"
        );

        api.delete_contact("Alice").unwrap();
        assert!(api.show_all().unwrap().listed_records.is_empty());
    }
}
