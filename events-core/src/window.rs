//! Time windows for selecting upcoming events.

use chrono::{DateTime, Days, Duration, Local, NaiveTime, TimeZone, Utc};

use crate::event::Event;

/// An open interval `(after, before)`.
/// Events starting exactly on either bound are outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub after: DateTime<Local>,
    pub before: DateTime<Local>,
}

impl TimeWindow {
    pub fn new(after: DateTime<Local>, before: DateTime<Local>) -> Self {
        TimeWindow { after, before }
    }

    /// From `now` until the same wall-clock time `days` calendar days later.
    pub fn next_days(now: DateTime<Local>, days: u64) -> Self {
        TimeWindow::new(now, days_later(&now, days))
    }

    /// From `now` until the next local midnight.
    pub fn rest_of_day(now: DateTime<Local>) -> Self {
        let before = now
            .date_naive()
            .succ_opt()
            .and_then(|tomorrow| {
                tomorrow
                    .and_time(NaiveTime::MIN)
                    .and_local_timezone(Local)
                    .earliest()
            })
            .unwrap_or_else(|| now + Duration::hours(24));

        TimeWindow::new(now, before)
    }

    pub fn contains(&self, instant: &DateTime<Local>) -> bool {
        self.after < *instant && *instant < self.before
    }

    /// Keep the events that start inside the window, preserving their order.
    pub fn filter(&self, events: Vec<Event>) -> Vec<Event> {
        events
            .into_iter()
            .filter(|event| self.contains(&event.occurs_at))
            .collect()
    }
}

/// Same wall-clock time `days` calendar days after `now`.
///
/// An ambiguous target (clocks going back) resolves to its earlier instant.
/// A target that doesn't exist (clocks going forward) falls back to exactly
/// `days * 24h` later. Only a date past chrono's range saturates.
fn days_later<Tz: TimeZone>(now: &DateTime<Tz>, days: u64) -> DateTime<Tz> {
    let local = now.naive_local();

    let Some(date) = local.date().checked_add_days(Days::new(days)) else {
        return DateTime::<Utc>::MAX_UTC.with_timezone(&now.timezone());
    };

    date.and_time(local.time())
        .and_local_timezone(now.timezone())
        .earliest()
        .unwrap_or_else(|| now.clone() + Duration::days(days as i64))
}
