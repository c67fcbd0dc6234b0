//! Error types for the schedule pipeline.

use thiserror::Error;

/// Errors that can occur while building the schedule calendars.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Schedule table not found in {0}")]
    MalformedDocument(String),

    #[error("First entry of {year}-{month:02} has no day ({title})")]
    MissingDayAnchor {
        year: i32,
        month: u32,
        title: String,
    },

    #[error("Day image {src} does not end in a two-digit day")]
    UnreadableDayImage { src: String },

    #[error("Invalid time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("Invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Could not write {output_id}: {source}")]
    Write {
        output_id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
