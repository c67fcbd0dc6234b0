//! ICS file parsing using the icalendar crate's parser.

use chrono::NaiveDateTime;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::{EventTime, ScheduleEvent};
use crate::resolve::{SOURCE_TZID, source_offset};

/// An output calendar read back from disk.
#[derive(Debug, Clone)]
pub struct ParsedCalendar {
    pub name: Option<String>,
    pub events: Vec<ScheduleEvent>,
}

/// Parse a calendar file written by [`generate_calendar_ics`](super::generate_calendar_ics).
pub fn parse_calendar(content: &str) -> ScheduleResult<ParsedCalendar> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| ScheduleError::IcsParse(e.to_string()))?;

    let name = calendar
        .properties
        .iter()
        .find(|p| p.name == "X-WR-CALNAME")
        .map(|p| p.val.to_string());

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(parse_event)
        .collect::<ScheduleResult<Vec<_>>>()?;

    Ok(ParsedCalendar { name, events })
}

fn parse_event(vevent: &Component) -> ScheduleResult<ScheduleEvent> {
    let required = |name: &str| {
        vevent
            .find_prop(name)
            .ok_or_else(|| ScheduleError::IcsParse(format!("VEVENT without {}", name)))
    };
    let text = |name: &str| vevent.find_prop(name).map(|p| p.val.to_string());

    let uid = required("UID")?.val.to_string();

    let dtstamp = required("DTSTAMP")?;
    let created = NaiveDateTime::parse_from_str(dtstamp.val.as_ref(), "%Y%m%dT%H%M%SZ")
        .map_err(|e| ScheduleError::IcsParse(format!("Bad DTSTAMP {}: {}", dtstamp.val, e)))?
        .and_utc();

    let start = to_event_time(required("DTSTART")?)?;
    let end = to_event_time(required("DTEND")?)?;

    Ok(ScheduleEvent {
        uid,
        created,
        summary: text("SUMMARY").unwrap_or_default(),
        description: text("DESCRIPTION").unwrap_or_default(),
        start,
        end,
        genre: text("X-GENRE").unwrap_or_default(),
        link: text("X-LINK"),
        time_text: text("X-TIME").filter(|t| !t.is_empty()),
    })
}

/// Convert a DTSTART/DTEND property, keeping the schedule's local time.
fn to_event_time(prop: &icalendar::parser::Property) -> ScheduleResult<EventTime> {
    let dpt = DatePerhapsTime::try_from(prop)
        .map_err(|_| ScheduleError::IcsParse(format!("Bad {} value {}", prop.name, prop.val)))?;

    let time = match dpt {
        DatePerhapsTime::Date(d) => EventTime::Date(d),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::WithTimezone { date_time, tzid } => EventTime::DateTimeZoned {
                datetime: date_time,
                tzid,
            },
            CalendarDateTime::Utc(dt) => EventTime::DateTimeZoned {
                datetime: dt.with_timezone(&source_offset()).naive_local(),
                tzid: SOURCE_TZID.to_string(),
            },
            CalendarDateTime::Floating(naive) => EventTime::DateTimeZoned {
                datetime: naive,
                tzid: SOURCE_TZID.to_string(),
            },
        },
    };

    Ok(time)
}
