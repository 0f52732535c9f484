//! # addrbook CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/addrbook/cli/`, and
//! this file only invokes `cli::run()` and handles process termination.
//!
//! A normal session, including one that ends at end of input, exits with 0.
//! Only startup failures (an unreadable `--config` file) or a broken stdin/stdout
//! exit with 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
