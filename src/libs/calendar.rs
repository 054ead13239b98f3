//! Month-grid bucketing for the schedule calendar.
//!
//! Builds the structure the calendar view renders: the days of one month,
//! preceded by blank cells so the 1st lands under its weekday column
//! (weeks start on Sunday), each day flagged when at least one task falls
//! on it. Month lengths and leap years come from chrono, not from here.

use crate::libs::care_date::CareDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: CareDate,
    pub has_task: bool,
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Blank cells before the 1st; equals the 1st's weekday index,
    /// Sunday = 0.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Cells chunked into weeks of seven, `None` for blanks. The last week
    /// is padded with trailing blanks to full length.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let mut cells: Vec<Option<&DayCell>> = Vec::new();
        cells.resize(self.leading_blanks as usize, None);
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells.chunks(7).map(|week| week.to_vec()).collect()
    }
}

/// Builds the grid for `year`/`month`, marking days present in `due_dates`.
///
/// Pure and deterministic; returns `None` when the month is out of range.
pub fn month_grid(year: i32, month: u32, due_dates: &BTreeSet<CareDate>) -> Option<MonthGrid> {
    let first = CareDate::from_ymd(year, month, 1)?;
    let leading_blanks = first.weekday_from_sunday();

    let mut days = Vec::with_capacity(31);
    let mut day = 1;
    while let Some(date) = CareDate::from_ymd(year, month, day) {
        days.push(DayCell {
            day,
            date,
            has_task: due_dates.contains(&date),
        });
        day += 1;
    }

    Some(MonthGrid {
        year,
        month,
        leading_blanks,
        days,
    })
}
