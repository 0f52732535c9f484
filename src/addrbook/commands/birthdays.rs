use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;
use crate::upcoming::upcoming_birthdays;
use chrono::NaiveDate;

pub fn run<S: ContactStore>(store: &S, today: NaiveDate, window_days: u32) -> Result<CmdResult> {
    let records = store.list_records()?;
    let upcoming = upcoming_birthdays(&records, today, window_days);
    if upcoming.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No upcoming birthdays")));
    }
    Ok(CmdResult::default().with_upcoming(upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 28).unwrap()
    }

    #[test]
    fn nothing_upcoming() {
        let fixture = BookFixture::new()
            .with_contact("Alice", &["1111111111"])
            .with_birthday("Bob", &[], "15.06.1990");
        let result = run(&fixture.book, today(), 7).unwrap();

        assert!(result.upcoming.is_empty());
        assert_eq!(result.messages[0].content, "No upcoming birthdays");
    }

    #[test]
    fn finds_birthdays_across_new_year() {
        let fixture = BookFixture::new()
            .with_birthday("Alice", &[], "31.12.1980")
            .with_birthday("Bob", &[], "04.01.1990")
            .with_birthday("Carol", &[], "05.01.1990");
        let result = run(&fixture.book, today(), 7).unwrap();

        let found: Vec<_> = result
            .upcoming
            .iter()
            .map(|u| (u.name.to_string(), u.days_until))
            .collect();
        assert_eq!(found, vec![("Alice".to_string(), 3), ("Bob".to_string(), 7)]);
        assert!(result.messages.is_empty());
    }
}
