//! # addrbook Architecture
//!
//! addrbook is a small contact manager: names, phone numbers and birthdays held in
//! memory, with a query for birthdays coming up in the next few days. The
//! interactive shell in `cli/` is one client of this library, not the library itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, parses them, prints results         │
//! │  - The ONLY place that knows about stdin/stdout/the clock   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates raw strings into Name / Phone / Birthday       │
//! │  - Dispatches to commands, returns Result<CmdResult>        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per command, pure business logic            │
//! │  - Missing contacts become messages, not errors             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait, in-memory AddressBook                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation
//!
//! Field types in [`model`] validate on construction:
//! - a [`model::Phone`] is exactly ten ASCII digits
//! - a [`model::Birthday`] is `DD.MM.YYYY` naming a real date
//!
//! An invalid value fails the whole operation before the store is touched.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): the bulk of the unit tests, run against
//!    `AddressBook` fixtures.
//! 2. **Upcoming** (`upcoming.rs`): window edges, year rollover and leap days,
//!    always with a fixed `today`.
//! 3. **API** (`api.rs`): validation failures and dispatch.
//! 4. **CLI** (`tests/`): the real binary driven through stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and the in-memory address book
//! - [`model`]: `Name`, `Phone`, `Birthday`, `Record`
//! - [`upcoming`]: Upcoming-birthday window computation
//! - [`config`]: Runtime configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod upcoming;
