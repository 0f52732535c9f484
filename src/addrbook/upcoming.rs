//! # Upcoming Birthdays
//!
//! Finds the contacts whose next birthday falls within a window of days
//! starting today.
//!
//! For each birthday the next occurrence of its month/day on or after `today`
//! is computed: this year's date, or next year's once this year's has passed.
//! A record is included when `0 <= days_until <= window`, so with the default
//! window of 7 a birthday exactly one week away is in and eight days away is out.
//!
//! Leap-day birthdays are observed on Feb 28 in non-leap years.
//!
//! `today` is always passed in. Nothing here reads the clock.

use crate::model::{Birthday, Name, Record};
use chrono::{Datelike, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    pub birthday: Birthday,
    pub next_occurrence: NaiveDate,
    pub days_until: i64,
}

/// The first date on or after `today` that celebrates `birthday`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    occurrence_in(birthday, today.year() + 1)
}

fn occurrence_in(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Collects birthdays within `window_days` of `today`, soonest first, ties by name.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window = i64::from(window_days);
    let mut upcoming: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let next = next_occurrence(birthday, today)?;
            let days_until = (next - today).num_days();
            (0..=window).contains(&days_until).then(|| UpcomingBirthday {
                name: record.name().clone(),
                birthday: *birthday,
                next_occurrence: next,
                days_until,
            })
        })
        .collect();

    upcoming.sort_by(|a, b| a.days_until.cmp(&b.days_until).then_with(|| a.name.cmp(&b.name)));
    upcoming
}
