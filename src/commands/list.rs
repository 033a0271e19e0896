use anyhow::Result;
use events_core::Event;
use events_core::agenda::{Presentation, sort_chronologically};
use events_core::error::EventsError;
use events_core::loader::load_events;
use events_core::mirror::MirrorSync;
use events_core::window::TimeWindow;
use owo_colors::OwoColorize;

use crate::render::render_events;

pub fn run(
    mirror: &impl MirrorSync,
    window: TimeWindow,
    presentation: Presentation,
) -> Result<()> {
    // A failed clone still lets us show whatever is already on disk
    if let Err(e) = mirror.ensure_local_mirror() {
        tracing::warn!("Could not sync events: {}", e);
    }

    let (events, skipped) = upcoming_events(mirror, window)?;

    for line in render_events(&events, presentation) {
        println!("{}", line);
    }

    if skipped > 0 {
        let noun = if skipped == 1 { "file" } else { "files" };
        eprintln!("{}", format!("Skipped {} unreadable event {}", skipped, noun).dimmed());
    }

    Ok(())
}

/// Load, filter and sort the events in the mirror.
/// Also returns how many record files had to be skipped.
fn upcoming_events(mirror: &impl MirrorSync, window: TimeWindow) -> Result<(Vec<Event>, usize)> {
    let report = match load_events(&mirror.events_dir()) {
        Err(EventsError::MirrorMissing(path)) => anyhow::bail!(
            "No events found at {}\n\n\
            Fetch them with:\n  \
            bristol-events update",
            path.display()
        ),
        other => other?,
    };

    let mut events = window.filter(report.events);
    sort_chronologically(&mut events);

    Ok((events, report.failures.len()))
}
