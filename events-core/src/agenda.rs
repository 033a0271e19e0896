//! Chronological ordering and day grouping of events.

use chrono::NaiveDate;

use crate::event::Event;

/// How a list of events is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// One line per event, prefixed with its weekday
    Flat,
    /// A header per day followed by that day's events
    #[default]
    Grouped,
}

/// Sort events by start. Events starting at the same instant keep their relative order.
pub fn sort_chronologically(events: &mut [Event]) {
    events.sort_by_key(|event| event.occurs_at);
}

/// A run of consecutive events that fall on the same local day
#[derive(Debug, Clone, Copy)]
pub struct DayGroup<'a> {
    pub day: NaiveDate,
    pub events: &'a [Event],
}

impl DayGroup<'_> {
    /// Weekday name, e.g. "Monday"
    pub fn label(&self) -> String {
        self.day.format("%A").to_string()
    }
}

/// Iterator over the day groups of a sorted slice of events.
pub struct DayGroups<'a> {
    remaining: &'a [Event],
}

/// Split sorted events into day groups, lazily.
///
/// A new group starts whenever an event's day differs from the previous
/// event's day, so the input should already be sorted.
pub fn day_groups(events: &[Event]) -> DayGroups<'_> {
    DayGroups { remaining: events }
}

impl<'a> Iterator for DayGroups<'a> {
    type Item = DayGroup<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let day = self.remaining.first()?.day;
        let len = self
            .remaining
            .iter()
            .position(|event| event.day != day)
            .unwrap_or(self.remaining.len());

        let (events, rest) = self.remaining.split_at(len);
        self.remaining = rest;

        Some(DayGroup { day, events })
    }
}
