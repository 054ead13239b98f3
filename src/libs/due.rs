//! Due-date calculation for plant care schedules.
//!
//! A plant's care is driven by a fixed interval in days between actions.
//! This module holds the one rule everything else builds on: given the date
//! of the last care action and the interval, is care due today?
//!
//! ## Contract
//!
//! - A plant that was never cared for is immediately due.
//! - Otherwise care is due from `last_action + interval_days` onward,
//!   boundary inclusive: a plant watered on the 1st with a 7-day interval
//!   is due on the 8th, not the 9th.
//! - Comparison is between calendar dates only. Both sides are [`CareDate`]
//!   values, so time-of-day and timezone offsets cannot produce off-by-one
//!   results near midnight.
//!
//! The function is pure and has no error cases. Interval validity
//! (`>= 1 day`) is enforced when a [`Plant`](crate::libs::plant::Plant) is
//! constructed, not here.

use crate::libs::care_date::CareDate;

/// Returns `true` if a care action is due on `today`.
///
/// `last_action` is the local calendar date of the most recent action, or
/// `None` if the action was never performed.
///
/// # Examples
///
/// ```
/// use frond::libs::care_date::CareDate;
/// use frond::libs::due::is_care_due;
///
/// let watered = CareDate::from_ymd(2024, 1, 1);
/// let today = CareDate::from_ymd(2024, 1, 8).unwrap();
/// assert!(is_care_due(watered, 7, today));
/// assert!(is_care_due(None, 7, today));
/// ```
pub fn is_care_due(last_action: Option<CareDate>, interval_days: u32, today: CareDate) -> bool {
    let Some(last) = last_action else {
        return true;
    };
    match last.plus_days(interval_days) {
        Some(next_due) => today >= next_due,
        // Next due date past the calendar range; nothing can be due.
        None => false,
    }
}
