use anyhow::{Context, Result};
use events_core::mirror::MirrorSync;
use owo_colors::OwoColorize;

pub fn run(mirror: &impl MirrorSync) -> Result<()> {
    mirror
        .refresh_local_mirror()
        .with_context(|| format!("Failed to update events in {}", mirror.root().display()))?;

    println!("{}", "Events up to date.".green());

    Ok(())
}
