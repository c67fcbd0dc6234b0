use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use prodsched_core::emit::{DirectoryWriter, emit_calendars};
use prodsched_core::fetch::HttpFetcher;
use prodsched_core::walker::walk_months;
use prodsched_core::{CalendarRouter, ScheduleConfig};

pub async fn run(config_path: Option<&Path>, output_dir: Option<PathBuf>) -> Result<()> {
    let config = ScheduleConfig::load(config_path)?;
    let output_dir = output_dir.unwrap_or_else(|| config.output_path());

    let fetcher = HttpFetcher::new()?;
    let mut router = CalendarRouter::default();

    let spinner = fetch_spinner(config.months.len());
    let walked = walk_months(&fetcher, &config.months, &config.base_url, &mut router).await;
    spinner.finish_and_clear();

    let summary = walked.context("Schedule scrape failed, no calendars were written")?;

    tracing::debug!("Writing calendars to {}", output_dir.display());
    let writer = DirectoryWriter::new(&output_dir);
    let written = emit_calendars(&router, &writer)?;

    println!(
        "Scraped {} entries from {} months",
        summary.entries.bold(),
        summary.months
    );
    for (output_id, count) in written {
        let path = writer.dir().join(output_id);
        println!("   {} {}", path.display(), format!("({count} events)").dimmed());
    }

    Ok(())
}

fn fetch_spinner(months: usize) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/"])
        .template("{msg} {spinner}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching {months} schedule pages"));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
