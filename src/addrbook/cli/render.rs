//! Turns `CmdResult` pieces into terminal text.
//!
//! Every function returns a `String` (newline terminated, or empty) so the
//! session loop decides where it goes. Colors come from `colored`, which turns
//! itself off when stdout is not a terminal.

use addrbook::api::{CmdMessage, MessageLevel};
use addrbook::model::{Phone, Record};
use addrbook::upcoming::UpcomingBirthday;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "   ";
const NO_VALUE: &str = "-";
const UPCOMING_DATE_FORMAT: &str = "%A, %d.%m.%Y";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

/// Three aligned columns: name, phones, birthday.
pub fn render_records(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let rows: Vec<[String; 3]> = records
        .iter()
        .map(|record| {
            let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
            [
                record.name().to_string(),
                if phones.is_empty() {
                    NO_VALUE.to_string()
                } else {
                    phones.join("; ")
                },
                record
                    .birthday()
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| NO_VALUE.to_string()),
            ]
        })
        .collect();

    let headers = ["Name", "Phones", "Birthday"];
    let mut widths = headers.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();
    let header_line = format!(
        "{}{}{}{}{}",
        pad_to_width(headers[0], widths[0]),
        COLUMN_GAP,
        pad_to_width(headers[1], widths[1]),
        COLUMN_GAP,
        headers[2]
    );
    output.push_str(&format!("{}\n", header_line.bold()));

    for [name, phones, birthday] in &rows {
        output.push_str(&format!(
            "{}{}{}{}{}\n",
            pad_to_width(name, widths[0]),
            COLUMN_GAP,
            pad_to_width(phones, widths[1]),
            COLUMN_GAP,
            birthday
        ));
    }
    output
}

pub fn render_upcoming(upcoming: &[UpcomingBirthday]) -> String {
    let mut output = String::new();
    for entry in upcoming {
        let when = match entry.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        output.push_str(&format!(
            "{}'s birthday is {} ({})\n",
            entry.name.as_str().bold(),
            when,
            entry.next_occurrence.format(UPCOMING_DATE_FORMAT)
        ));
    }
    output
}

/// Pads with spaces up to a display width, so wide characters line up.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
