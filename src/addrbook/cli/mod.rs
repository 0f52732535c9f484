//! # CLI Behavior
//!
//! This is **one possible UI client** for addrbook, not the application itself.
//! It is the only place that reads stdin, writes stdout or asks the clock for
//! today's date.
//!
//! ## Session
//!
//! The binary prints a greeting and then reads one command per line:
//!
//! ```text
//! hello                                  add <name> [phone]
//! change <name> <old-phone> <new-phone>  phone <name>
//! all                                    add-birthday <name> <DD.MM.YYYY>
//! show-birthday <name>                   birthdays
//! delete <name>                          remove-phone <name> <phone>
//! help                                   close | exit
//! ```
//!
//! - Blank lines are ignored; end of input behaves like `exit`.
//! - An unknown first word prints `Invalid command.` and the loop continues.
//! - A known command with the wrong arguments prints its usage.
//! - A validation error (bad phone, bad date) is printed and only that
//!   command is dropped.
//!
//! Every line is parsed by clap in multicall mode, so the first token selects
//! the subcommand exactly as a binary name would.
//!
//! ## Module Structure
//!
//! - `commands`: The session loop and dispatch to the API
//! - `render`: Output formatting (messages, the contacts table, upcoming birthdays)
//! - `setup`: Process arguments and per-line command parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
