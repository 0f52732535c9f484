use super::ContactStore;
use crate::error::Result;
use crate::model::{Name, Record};
use crate::upcoming::{upcoming_birthdays, UpcomingBirthday};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// In-memory address book, keyed by contact name.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: BTreeMap<Name, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().clone(), record);
    }

    pub fn find(&self, name: &Name) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &Name) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &Name) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.records.values(), today, window_days)
    }
}

impl ContactStore for AddressBook {
    fn save_record(&mut self, record: &Record) -> Result<()> {
        self.add_record(record.clone());
        Ok(())
    }

    fn get_record(&self, name: &Name) -> Result<Option<Record>> {
        Ok(self.find(name).cloned())
    }

    fn delete_record(&mut self, name: &Name) -> Result<Option<Record>> {
        Ok(self.delete(name))
    }

    fn list_records(&self) -> Result<Vec<Record>> {
        Ok(self.records().cloned().collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Birthday, Phone};

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::parse(name).unwrap());
            for phone in phones {
                record.add_phone(Phone::parse(phone).unwrap());
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, phones: &[&str], birthday: &str) -> Self {
            self = self.with_contact(name, phones);
            let name = Name::parse(name).unwrap();
            if let Some(record) = self.book.find_mut(&name) {
                record.set_birthday(Birthday::parse(birthday).unwrap());
            }
            self
        }

        pub fn record(&self, name: &str) -> Option<&Record> {
            self.book.find(&Name::parse(name).unwrap())
        }
    }
}
