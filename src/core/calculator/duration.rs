use crate::models::clock_time::{ClockTime, MINUTES_PER_DAY};

/// Minutes from `start` to `end` on a shared reference day.
/// An `end` earlier than `start` is read as the next day (overnight shift);
/// equal times give 0, never a full day.
pub fn minutes_between(start: ClockTime, end: ClockTime) -> i64 {
    let mut mins = end.minutes_from_midnight() - start.minutes_from_midnight();
    if mins < 0 {
        mins += MINUTES_PER_DAY;
    }
    mins
}

/// Session length in hours, fractional (e.g. 4.5).
pub fn compute_duration(start: ClockTime, end: ClockTime) -> f64 {
    minutes_between(start, end) as f64 / 60.0
}
