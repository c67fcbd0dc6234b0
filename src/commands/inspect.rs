use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use prodsched_core::ics::parse_calendar;

use crate::render::render_event;

pub fn run(file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;
    let calendar = parse_calendar(&content)?;

    let name = calendar.name.as_deref().unwrap_or("(unnamed calendar)");
    println!("{} {}", name.bold(), format!("({} events)", calendar.events.len()).dimmed());

    if calendar.events.is_empty() {
        println!("{}", "  No events".dimmed());
        return Ok(());
    }

    for event in &calendar.events {
        println!("{}", render_event(event));
    }

    Ok(())
}
