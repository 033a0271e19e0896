//! Event records as stored in the events repository.
//!
//! Each `.json` file under `events/` holds exactly one record. Records are
//! decoded into a fresh `EventRecord` per file and then turned into an
//! `Event`, which additionally carries the local instant and calendar day
//! the event starts on.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{EventsError, EventsResult};

/// Where an event takes place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// On-disk shape of a record file.
///
/// The timestamps are required; everything else falls back to empty values.
#[derive(Debug, Deserialize)]
struct EventRecord {
    #[serde(default)]
    title: String,
    #[serde(default)]
    org: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    link: String,
    start_time: i64,
    end_time: i64,
    #[serde(default)]
    location: Location,
}

/// A community event loaded from the local mirror
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    /// Organising group
    pub org: String,
    pub description: String,
    pub link: String,
    /// Start, in seconds since the Unix epoch
    pub start_time: i64,
    /// End, in seconds since the Unix epoch (informational only)
    pub end_time: i64,
    pub location: Location,

    /// `start_time` in the host's local timezone
    pub occurs_at: DateTime<Local>,
    /// Local calendar day of `occurs_at`, used as the grouping key
    pub day: NaiveDate,
}

impl Event {
    /// Read and decode a single record file.
    pub fn from_file(path: &Path) -> EventsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Decode a record from its JSON text. `path` is only used for error messages.
    pub fn parse(path: &Path, content: &str) -> EventsResult<Self> {
        let record: EventRecord =
            serde_json::from_str(content).map_err(|e| EventsError::Parse {
                path: PathBuf::from(path),
                message: e.to_string(),
            })?;

        Self::from_record(record)
    }

    fn from_record(record: EventRecord) -> EventsResult<Self> {
        let occurs_at = Local
            .timestamp_opt(record.start_time, 0)
            .single()
            .ok_or(EventsError::TimestampOutOfRange(record.start_time))?;

        Ok(Event {
            title: record.title,
            org: record.org,
            description: record.description,
            link: record.link,
            start_time: record.start_time,
            end_time: record.end_time,
            location: record.location,
            occurs_at,
            day: occurs_at.date_naive(),
        })
    }
}
