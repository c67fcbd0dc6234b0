use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use prodsched_core::ScheduleConfig;

pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = ScheduleConfig::load(config_path)?;

    for month in &config.months {
        let label = format!("{}-{:02}", month.year, month.number);
        println!("{} {}", label.bold(), month.page_url(&config.base_url));
    }

    Ok(())
}
