//! Weekly schedule view.
//!
//! Weeks start on Sunday; the week number and year follow ISO numbering of
//! the week's first day.

use chrono::{Datelike, Days, Local, NaiveDate};

const DAY_ID_FORMAT: &str = "%Y-%m-%d";
const DAY_TITLE_FORMAT: &str = "%B %d, %A";

/// A single day in the weekly view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    /// Stable identifier, e.g. `2026-08-30`.
    pub id: String,
    /// Display title, e.g. `August 30, Sunday`.
    pub title: String,
    pub is_current_day: bool,
}

/// Seven days starting on Sunday.
#[derive(Debug, Clone)]
pub struct Week {
    pub days: Vec<Day>,
    pub number: u32,
    pub year: i32,
}

/// Builds week views for the scheduling pages.
pub struct Scheduler;

impl Scheduler {
    pub fn new() -> Self {
        Self
    }

    /// The week containing today.
    pub fn week(&self) -> Week {
        week_from(Local::now().date_naive(), 0)
    }

    /// The week after the current one.
    pub fn next_week(&self) -> Week {
        week_from(Local::now().date_naive(), 7)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn week_from(today: NaiveDate, offset_days: u64) -> Week {
    let start_of_week = today
        .checked_sub_days(Days::new(today.weekday().num_days_from_sunday() as u64))
        .and_then(|d| d.checked_add_days(Days::new(offset_days)))
        .unwrap_or(today);

    let days = (0..7)
        .filter_map(|i| start_of_week.checked_add_days(Days::new(i)))
        .map(|day| Day {
            id: day.format(DAY_ID_FORMAT).to_string(),
            title: day.format(DAY_TITLE_FORMAT).to_string(),
            is_current_day: day == today,
        })
        .collect();

    let iso = start_of_week.iso_week();
    Week {
        days,
        number: iso.week(),
        year: iso.year(),
    }
}
