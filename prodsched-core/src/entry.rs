//! Normalized schedule rows.

use std::fmt;

/// Time text that marks a release date rather than a broadcast slot.
pub const RELEASE_DAY_LABEL: &str = "発売日";

/// Wall-clock time as printed on the schedule.
///
/// Hours may exceed 23: broadcast listings write 25:30 for 01:30 the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        ClockTime { hour, minute }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One schedule row after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Day of month; `None` means the same day as the previous dated row.
    pub day: Option<u32>,
    /// Time cell text as displayed (not digit-translated)
    pub time_text: Option<String>,
    pub from: Option<ClockTime>,
    /// `None` for instant events
    pub to: Option<ClockTime>,
    pub genre: String,
    pub title: String,
    pub link: Option<String>,
    pub performers: Option<String>,
    /// Human-readable block shown as the event description
    pub description: String,
}

impl ScheduleEntry {
    pub fn is_release_day(&self) -> bool {
        self.time_text.as_deref() == Some(RELEASE_DAY_LABEL)
    }
}

/// Build the four-line description block.
///
/// Missing fields are rendered as empty strings after their label.
pub fn compose_description(
    time_text: Option<&str>,
    performers: Option<&str>,
    title: &str,
    link: Option<&str>,
) -> String {
    format!(
        "時間：{}\n出演：{}\n記事：{}\nリンク：{}\n",
        time_text.unwrap_or_default(),
        performers.unwrap_or_default(),
        title,
        link.unwrap_or_default()
    )
}
