//! Month feed entries and schedule page URLs.

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

pub const DEFAULT_BASE_URL: &str = "http://idolmaster.jp/schedule";

/// How the schedule site addresses a month's page.
///
/// The site changed its URL scheme over the years, so each month carries
/// the style it was published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlStyle {
    /// `{base}/{year}{label}.php`
    A,
    /// `{base}/{year}/{label}.php`
    B,
    /// `{base}/?ey={year}&em={label}`
    C,
}

/// One page of the schedule to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSpec {
    pub year: i32,
    /// Month as it appears in the page URL ("january", "01", ...)
    pub label: String,
    /// Calendar month, 1..=12
    pub number: u32,
    pub style: UrlStyle,
}

impl MonthSpec {
    pub fn new(year: i32, label: &str, number: u32, style: UrlStyle) -> Self {
        MonthSpec {
            year,
            label: label.to_string(),
            number,
            style,
        }
    }

    /// Page URL for this month under `base_url`.
    pub fn page_url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self.style {
            UrlStyle::A => format!("{}/{}{}.php", base, self.year, self.label),
            UrlStyle::B => format!("{}/{}/{}.php", base, self.year, self.label),
            UrlStyle::C => format!("{}/?ey={}&em={}", base, self.year, self.label),
        }
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        if !(1..=12).contains(&self.number) {
            return Err(ScheduleError::Config(format!(
                "Month {} of {} is out of range (expected 1-12)",
                self.number, self.year
            )));
        }
        Ok(())
    }
}
