use super::render::{render_messages, render_records, render_upcoming};
use super::setup::{get_repl_help, parse_line, Cli, ParsedLine, ReplCommand};
use addrbook::api::{AddressBookApi, CmdMessage};
use addrbook::config::BookConfig;
use addrbook::error::Result;
use addrbook::store::memory::AddressBook;
use addrbook::store::ContactStore;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

const HELLO_REPLY: &str = "How can I help you?";
const FAREWELL: &str = "Good bye!";
const INVALID_COMMAND: &str = "Invalid command.";

enum Step {
    Output(String),
    Exit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = BookConfig::load_or_default(cli.config.as_deref())?;
    if let Some(days) = cli.window_days {
        config = config.with_window_days(days);
    }
    info!(window_days = config.window_days, "starting session");

    let api = AddressBookApi::new(AddressBook::new(), config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(api, stdin.lock(), stdout.lock(), || Local::now().date_naive())
}

/// Logs go to stderr so they never interleave with command output.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Reads commands from `input` until `exit`/`close` or end of input.
///
/// `today` is asked for on every `birthdays` command, so a long session
/// that crosses midnight sees the new date.
pub fn run_session<S, R, W, F>(
    mut api: AddressBookApi<S>,
    input: R,
    mut output: W,
    today: F,
) -> Result<()>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "{}", api.config().greeting)?;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", api.config().prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("end of input");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            break;
        };
        let line = line?;

        let text = match parse_line(&line) {
            ParsedLine::Empty => continue,
            ParsedLine::Unknown(token) => {
                debug!(%token, "unknown command");
                render_messages(&[CmdMessage::error(INVALID_COMMAND)])
            }
            ParsedLine::Usage(usage) => format!("{}\n", usage),
            ParsedLine::Command(command) => match dispatch(&mut api, command, &today) {
                Ok(Step::Output(text)) => text,
                Ok(Step::Exit) => {
                    writeln!(output, "{}", FAREWELL)?;
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    render_messages(&[CmdMessage::error(e.to_string())])
                }
            },
        };
        write!(output, "{}", text)?;
    }

    output.flush()?;
    Ok(())
}

fn dispatch<S, F>(api: &mut AddressBookApi<S>, command: ReplCommand, today: &F) -> Result<Step>
where
    S: ContactStore,
    F: Fn() -> NaiveDate,
{
    let result = match command {
        ReplCommand::Hello => return Ok(Step::Output(format!("{}\n", HELLO_REPLY))),
        ReplCommand::Help => return Ok(Step::Output(get_repl_help())),
        ReplCommand::Exit => return Ok(Step::Exit),
        ReplCommand::Add { name, phone } => api.add_contact(&name, phone.as_deref())?,
        ReplCommand::Change {
            name,
            old_phone,
            new_phone,
        } => api.change_phone(&name, &old_phone, &new_phone)?,
        ReplCommand::Phone { name } => api.show_phone(&name)?,
        ReplCommand::All => {
            let result = api.show_all()?;
            return Ok(Step::Output(format!(
                "{}{}",
                render_records(&result.listed_records),
                render_messages(&result.messages)
            )));
        }
        ReplCommand::AddBirthday { name, date } => api.add_birthday(&name, &date)?,
        ReplCommand::ShowBirthday { name } => api.show_birthday(&name)?,
        ReplCommand::Birthdays => {
            let result = api.birthdays(today())?;
            return Ok(Step::Output(format!(
                "{}{}",
                render_upcoming(&result.upcoming),
                render_messages(&result.messages)
            )));
        }
        ReplCommand::Delete { name } => api.delete_contact(&name)?,
        ReplCommand::RemovePhone { name, phone } => api.remove_phone(&name, &phone)?,
    };
    Ok(Step::Output(render_messages(&result.messages)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 28).unwrap()
    }

    fn session(script: &str) -> String {
        colored::control::set_override(false);
        let api = AddressBookApi::new(AddressBook::new(), BookConfig::default());
        let mut output = Vec::new();
        run_session(api, Cursor::new(script.to_string()), &mut output, today).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn greets_and_says_goodbye() {
        let output = session("hello\nexit\n");
        assert!(output.starts_with("Welcome to the assistant bot!\n"));
        assert!(output.contains("Enter a command: How can I help you?\n"));
        assert!(output.ends_with("Good bye!\n"));
    }

    #[test]
    fn close_ends_session_and_ignores_the_rest() {
        let output = session("close\nhello\n");
        assert!(output.ends_with("Good bye!\n"));
        assert!(!output.contains("How can I help you?"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let output = session("hello\n");
        assert!(output.ends_with("Good bye!\n"));
    }

    #[test]
    fn unknown_command_continues_loop() {
        let output = session("dance\nhello\nexit\n");
        assert!(output.contains("Invalid command.\n"));
        assert!(output.contains("How can I help you?"));
    }

    #[test]
    fn validation_error_aborts_only_that_command() {
        let output = session("add Alice 12345\nadd Alice 0123456789\nphone Alice\nexit\n");
        assert!(output.contains("Invalid phone number format: '12345'"));
        assert!(output.contains("Contact added."));
        assert!(output.contains("Alice's phone number: 0123456789"));
    }

    #[test]
    fn full_contact_workflow() {
        let script = [
            "add Alice 1111111111",
            "add Alice 2222222222",
            "change Alice 1111111111 3333333333",
            "phone Alice",
            "add-birthday Alice 31.12.1990",
            "show-birthday Alice",
            "birthdays",
            "all",
            "exit",
        ]
        .join("\n");
        let output = session(&script);

        assert!(output.contains("Contact added."));
        assert!(output.contains("Contact updated."));
        assert!(output.contains("Phone number updated for Alice"));
        assert!(output.contains("Alice's phone number: 3333333333, 2222222222"));
        assert!(output.contains("Birthday added for Alice"));
        assert!(output.contains("Alice's birthday: 31.12.1990"));
        assert!(output.contains("Alice's birthday is in 3 days (Tuesday, 31.12.2024)"));
        assert!(output.contains("Alice   3333333333; 2222222222   31.12.1990"));
    }

    #[test]
    fn lookups_on_missing_contacts_report_not_found() {
        let output = session("phone Bob\nshow-birthday Bob\nchange Bob 1111111111 2222222222\nexit\n");
        assert_eq!(output.matches("Contact Bob not found").count(), 3);
    }

    #[test]
    fn empty_book_messages() {
        let output = session("all\nbirthdays\nexit\n");
        assert!(output.contains("Address book is empty"));
        assert!(output.contains("No upcoming birthdays"));
    }

    #[test]
    fn wrong_arity_prints_usage_and_continues() {
        let output = session("add-birthday Alice\nhello\nexit\n");
        assert!(output.contains("Usage"));
        assert!(output.contains("How can I help you?"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let output = session("\n   \nexit\n");
        assert!(!output.contains("Invalid command."));
        assert_eq!(output.matches("Enter a command: ").count(), 3);
    }
}
