use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Process-level arguments. None are required; the defaults give the stock session.
#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version)]
#[command(about = "Interactive address book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// How many days ahead `birthdays` looks
    #[arg(long, value_name = "DAYS")]
    pub window_days: Option<u32>,

    /// Load settings from a JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// One line typed at the prompt. The first token names the command.
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Say hello
    #[command(display_order = 1)]
    Hello,

    /// Add a contact, or another phone to an existing one
    #[command(display_order = 2)]
    Add {
        name: String,
        /// Ten digits
        phone: Option<String>,
    },

    /// Replace one of a contact's phones
    #[command(display_order = 3)]
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact's phones
    #[command(display_order = 4)]
    Phone { name: String },

    /// Show every contact
    #[command(display_order = 5)]
    All,

    /// Set a contact's birthday (DD.MM.YYYY)
    #[command(display_order = 6)]
    AddBirthday { name: String, date: String },

    /// Show a contact's birthday
    #[command(display_order = 7)]
    ShowBirthday { name: String },

    /// Birthdays in the coming days
    #[command(display_order = 8)]
    Birthdays,

    /// Remove a contact
    #[command(display_order = 9)]
    Delete { name: String },

    /// Remove one phone from a contact
    #[command(display_order = 10)]
    RemovePhone { name: String, phone: String },

    /// List commands
    #[command(display_order = 11)]
    Help,

    /// Leave the session
    #[command(alias = "close", display_order = 12)]
    Exit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParsedLine {
    Empty,
    Command(ReplCommand),
    /// First token is not a command
    Unknown(String),
    /// Known command, bad arguments; carries clap's explanation
    Usage(String),
}

pub fn parse_line(line: &str) -> ParsedLine {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return ParsedLine::Empty;
    };

    if !is_known_command(first) {
        return ParsedLine::Unknown((*first).to_string());
    }

    match ReplLine::try_parse_from(tokens.iter().copied()) {
        Ok(parsed) => ParsedLine::Command(parsed.command),
        Err(e) => ParsedLine::Usage(e.to_string().trim_end().to_string()),
    }
}

fn is_known_command(token: &str) -> bool {
    ReplLine::command()
        .get_subcommands()
        .any(|sc| sc.get_name() == token || sc.get_all_aliases().any(|alias| alias == token))
}

/// Command summary for the `help` command
pub fn get_repl_help() -> String {
    let cmd = ReplLine::command();
    let mut subcommands: Vec<_> = cmd.get_subcommands().collect();
    subcommands.sort_by_key(|sc| sc.get_display_order());

    let mut output = String::from("Commands:\n");
    for sc in subcommands {
        let usage: Vec<String> = sc
            .get_positionals()
            .map(|arg| {
                let id = arg.get_id().as_str().replace('_', "-");
                if arg.is_required_set() {
                    format!("<{}>", id)
                } else {
                    format!("[{}]", id)
                }
            })
            .collect();
        let signature = if usage.is_empty() {
            sc.get_name().to_string()
        } else {
            format!("{} {}", sc.get_name(), usage.join(" "))
        };
        let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
        output.push_str(&format!("  {:<38} {}\n", signature, about));
    }
    output
}
