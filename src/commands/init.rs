use std::path::PathBuf;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use prodsched_core::month::DEFAULT_BASE_URL;
use prodsched_core::{MonthSpec, ScheduleConfig, UrlStyle};

const DEFAULT_CONFIG_FILE: &str = "prodsched.toml";

pub fn run(path: Option<PathBuf>, year: i32, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if path.exists() && !force {
        bail!(
            "{} already exists.\n\nUse --force to overwrite it.",
            path.display()
        );
    }

    let config = starter_config(year);
    config.save(&path)?;

    println!(
        "Wrote {} with {} months of {}",
        path.display().bold(),
        config.months.len(),
        year
    );
    Ok(())
}

/// Twelve months addressed with the query-string URL style.
fn starter_config(year: i32) -> ScheduleConfig {
    let months = (1..=12)
        .map(|n| MonthSpec::new(year, &format!("{:02}", n), n, UrlStyle::C))
        .collect();

    ScheduleConfig {
        base_url: DEFAULT_BASE_URL.to_string(),
        output_dir: PathBuf::from("."),
        months,
    }
}
