//! Calendar event types.
//!
//! These are the events accumulated per output calendar and written to
//! (or read back from) .ics files.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::entry::ScheduleEntry;
use crate::resolve::{Occurrence, SOURCE_TZID};

/// A calendar event built from one schedule entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEvent {
    pub uid: String,
    /// DTSTAMP
    pub created: DateTime<Utc>,
    pub summary: String,
    pub description: String,
    pub start: EventTime,
    pub end: EventTime,

    // Schedule-specific fields, written as X- properties
    pub genre: String,
    pub link: Option<String>,
    pub time_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTime {
    Date(NaiveDate),
    /// Local datetime with a TZID parameter
    DateTimeZoned {
        datetime: NaiveDateTime,
        tzid: String,
    },
}

impl ScheduleEvent {
    /// Build an event from a normalized entry and its resolved occurrence.
    ///
    /// All-day events end on the following day, since DTEND is exclusive
    /// for VALUE=DATE events. This stands in for "end equals start", which
    /// only applies to timed events here.
    pub fn from_entry(entry: &ScheduleEntry, occurrence: &Occurrence) -> Self {
        let (start, end) = match occurrence {
            Occurrence::AllDay(date) => (
                EventTime::Date(*date),
                EventTime::Date(*date + Duration::days(1)),
            ),
            Occurrence::Timed { start, end } => (
                EventTime::zoned(start.naive_local()),
                EventTime::zoned(end.naive_local()),
            ),
        };

        ScheduleEvent {
            uid: format!("{}@prodsched", Uuid::new_v4()),
            created: Utc::now(),
            summary: entry.title.clone(),
            description: entry.description.clone(),
            start,
            end,
            genre: entry.genre.clone(),
            link: entry.link.clone(),
            time_text: entry.time_text.clone(),
        }
    }
}

impl EventTime {
    fn zoned(datetime: NaiveDateTime) -> Self {
        EventTime::DateTimeZoned {
            datetime,
            tzid: SOURCE_TZID.to_string(),
        }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::Date(_))
    }
}
