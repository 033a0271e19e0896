use std::path::Path;

use chrono::{DateTime, Local, TimeZone};

use crate::event::Event;

pub fn event_at(title: &str, at: DateTime<Local>) -> Event {
    let json = format!(
        r#"{{"title": "{}", "org": "Test Org", "start_time": {}, "end_time": {}}}"#,
        title,
        at.timestamp(),
        at.timestamp() + 3600
    );
    Event::parse(Path::new("test.json"), &json).unwrap()
}

pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn titles(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.title.as_str()).collect()
}
