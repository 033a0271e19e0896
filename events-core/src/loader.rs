//! Discovery and decoding of record files.

use std::path::{Path, PathBuf};

use crate::error::{EventsError, EventsResult};
use crate::event::Event;

const RECORD_EXTENSION: &str = "json";

/// A record file that could not be turned into an event
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: EventsError,
}

/// Result of loading a directory tree of record files.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub events: Vec<Event>,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    fn skip(&mut self, path: PathBuf, error: EventsError) {
        tracing::warn!("Skipping {}: {}", path.display(), error);
        self.failures.push(LoadFailure { path, error });
    }
}

/// Load every `.json` record found anywhere under `root`.
///
/// Files that can't be read or decoded are logged and collected in
/// `LoadReport::failures`; they never stop the rest of the tree from loading.
/// A missing `root` is an error.
pub fn load_events(root: &Path) -> EventsResult<LoadReport> {
    if !root.is_dir() {
        return Err(EventsError::MirrorMissing(root.to_path_buf()));
    }

    let mut report = LoadReport::default();
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            // The root itself must be readable
            Err(e) if dir == root => return Err(e.into()),
            Err(e) => {
                report.skip(dir, e.into());
                continue;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    report.skip(dir.clone(), e.into());
                    continue;
                }
            };
            let path = entry.path();

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    report.skip(path, e.into());
                    continue;
                }
            };

            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() && is_record_file(&path) {
                files.push(path);
            }
        }
    }

    tracing::debug!("Found {} record files under {}", files.len(), root.display());

    for path in files {
        match Event::from_file(&path) {
            Ok(event) => report.events.push(event),
            Err(error) => report.skip(path, error),
        }
    }

    Ok(report)
}

fn is_record_file(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == RECORD_EXTENSION)
}
