//! # Storage Layer
//!
//! The [`ContactStore`] trait is the seam between the command layer and wherever
//! records live. Commands follow a read-modify-write cycle: fetch a record by
//! name, change the copy, save it back. Nothing outside the store holds a
//! reference into it.
//!
//! ## Implementations
//!
//! - [`memory::AddressBook`]: the only backend. Records live in a map keyed by
//!   name and vanish when the process exits.
//!
//! Listing is ordered by name so that output is stable between runs.

use crate::error::Result;
use crate::model::{Name, Record};

pub mod memory;

/// Abstract interface for contact storage.
///
/// Names are unique: saving a record whose name already exists replaces it.
pub trait ContactStore {
    /// Save a record (create or replace)
    fn save_record(&mut self, record: &Record) -> Result<()>;

    /// Get a record by name
    fn get_record(&self, name: &Name) -> Result<Option<Record>>;

    /// Remove a record, returning it if it existed
    fn delete_record(&mut self, name: &Name) -> Result<Option<Record>>;

    /// All records, ordered by name
    fn list_records(&self) -> Result<Vec<Record>>;
}
