//! Core data types: the validated contact fields and the [`Record`] that groups them.
//!
//! Every field type validates on construction, so a value that exists is a value
//! that passed its rules. Nothing downstream re-checks.

use crate::error::{AddrBookError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const PHONE_LEN: usize = 10;
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Contact name. Acts as the primary key of the address book.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AddrBookError::InvalidName("name cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = AddrBookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A phone number: exactly ten ASCII digits, stored as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: &str) -> Result<Self> {
        if !Self::is_valid(value) {
            return Err(AddrBookError::InvalidPhone(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        value.len() == PHONE_LEN && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = AddrBookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A birthday in `DD.MM.YYYY` form.
///
/// The textual shape is checked before handing off to chrono, which on its own
/// would also accept unpadded days and months (`1.2.2000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self> {
        if !has_date_shape(value) {
            return Err(AddrBookError::InvalidBirthday(value.to_string()));
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| AddrBookError::InvalidBirthday(value.to_string()))
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = AddrBookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// One contact: a name, its phones in the order they were added, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone. Returns `false` when the record already holds that number.
    pub fn add_phone(&mut self, phone: Phone) -> bool {
        if self.phones.contains(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    pub fn remove_phone(&mut self, phone: &Phone) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p != phone);
        self.phones.len() != before
    }

    /// Replaces `old` in place, keeping its position. Returns `false` if `old` is absent.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> bool {
        match self.phones.iter_mut().find(|p| *p == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Sets the birthday, returning the one it replaced.
    pub fn set_birthday(&mut self, birthday: Birthday) -> Option<Birthday> {
        self.birthday.replace(birthday)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
