//! Date/time resolution for schedule entries.
//!
//! The schedule is published in Japan Standard Time. Every timestamp is
//! anchored to a fixed UTC+9 offset; JST has no daylight saving transitions.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};

use crate::entry::ClockTime;
use crate::error::{ScheduleError, ScheduleResult};

/// Timezone identifier written into calendar files.
pub const SOURCE_TZID: &str = "Asia/Tokyo";

const SOURCE_OFFSET_SECS: i32 = 9 * 3600;

/// The fixed UTC+9 offset of the source schedule.
pub fn source_offset() -> FixedOffset {
    FixedOffset::east_opt(SOURCE_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

/// When a schedule entry takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    /// Release days and label-only rows
    AllDay(NaiveDate),
    Timed {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
}

/// Resolve a schedule date and optional clock times.
///
/// Without a start time the entry is all-day. Without an end time the event
/// ends when it starts.
pub fn resolve_occurrence(
    year: i32,
    month: u32,
    day: u32,
    from: Option<ClockTime>,
    to: Option<ClockTime>,
) -> ScheduleResult<Occurrence> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ScheduleError::InvalidDate { year, month, day })?;

    let Some(from) = from else {
        return Ok(Occurrence::AllDay(date));
    };

    let start = resolve_time(date, from)?;
    let end = match to {
        Some(to) => resolve_time(date, to)?,
        None => start,
    };

    Ok(Occurrence::Timed { start, end })
}

/// Anchor a clock time on `date`; hours of 24 and above fall on the next day.
fn resolve_time(date: NaiveDate, time: ClockTime) -> ScheduleResult<DateTime<FixedOffset>> {
    let invalid = || ScheduleError::InvalidTime {
        hour: time.hour,
        minute: time.minute,
    };

    let (hour, date) = if time.hour >= 24 {
        (time.hour - 24, date + Duration::days(1))
    } else {
        (time.hour, date)
    };

    let clock = NaiveTime::from_hms_opt(hour, time.minute, 0).ok_or_else(invalid)?;

    date.and_time(clock)
        .and_local_timezone(source_offset())
        .single()
        .ok_or_else(invalid)
}
