//! Terminal rendering of event listings.

use events_core::Event;
use events_core::agenda::{DayGroup, Presentation, day_groups};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DayGroup<'_> {
    fn render(&self) -> String {
        let date = self.day.format("%-d %b").to_string();
        format!("{} {}", self.label().bold(), date.dimmed())
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let time = self.occurs_at.format("%H:%M").to_string();
        let mut line = format!("  {}  {}  {}", time, self.org.dimmed(), self.title);

        if !self.location.name.is_empty() {
            let place = format!("@ {}", self.location.name);
            line.push_str(&format!("  {}", place.dimmed()));
        }

        line
    }
}

/// Render sorted events as output lines.
pub fn render_events(events: &[Event], presentation: Presentation) -> Vec<String> {
    match presentation {
        Presentation::Flat => events.iter().map(render_flat).collect(),
        Presentation::Grouped => render_grouped(events),
    }
}

fn render_flat(event: &Event) -> String {
    format!("{} {}", event.occurs_at.format("%A"), event.title)
}

fn render_grouped(events: &[Event]) -> Vec<String> {
    if events.is_empty() {
        return vec!["No upcoming events".dimmed().to_string()];
    }

    let mut lines = Vec::new();

    for (i, group) in day_groups(events).enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(group.render());
        lines.extend(group.events.iter().map(|event| event.render()));
    }

    lines
}
