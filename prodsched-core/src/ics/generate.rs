//! ICS file generation.

use crate::error::ScheduleResult;
use crate::event::{EventTime, ScheduleEvent};
use crate::resolve::SOURCE_TZID;
use crate::router::Calendar;
use icalendar::{Component, Property, ValueType};

pub const PRODID: &str = "-//prodsched//Producer Schedule//JA";

/// Generate .ics content for a whole output calendar.
pub fn generate_calendar_ics(calendar: &Calendar) -> ScheduleResult<String> {
    let mut cal = icalendar::Calendar::new();

    let mut name = Property::new("X-WR-CALNAME", calendar.definition.name);
    name.append_parameter(ValueType::Text);
    cal.append_property(name);

    for event in calendar.events() {
        cal.push(to_ics_event(event));
    }

    let cal = cal.done();

    Ok(post_process(&cal.to_string()))
}

fn to_ics_event(event: &ScheduleEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.add_property("DTSTAMP", event.created.format("%Y%m%dT%H%M%SZ").to_string());

    add_datetime_property(&mut ics_event, "DTSTART", &event.start);
    add_datetime_property(&mut ics_event, "DTEND", &event.end);

    ics_event.summary(&event.summary);
    ics_event.description(&event.description);

    add_text_property(&mut ics_event, "X-GENRE", &event.genre);
    if let Some(ref link) = event.link {
        add_text_property(&mut ics_event, "X-LINK", link);
    }
    if let Some(ref time_text) = event.time_text {
        add_text_property(&mut ics_event, "X-TIME", time_text);
    }

    ics_event.done()
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with ours
/// - Remove CALSCALE:GREGORIAN (it's the default)
/// - Insert the shared VTIMEZONE ahead of the first component
fn post_process(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len() + 256);
    let mut timezone_written = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        let component_start = line.starts_with("BEGIN:V") && line != "BEGIN:VCALENDAR";
        if !timezone_written && (component_start || line == "END:VCALENDAR") {
            result.push_str(&vtimezone());
            timezone_written = true;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// JST declared as a single standard observance: +09:00, no transitions.
pub fn vtimezone() -> String {
    [
        "BEGIN:VTIMEZONE",
        &format!("TZID:{}", SOURCE_TZID),
        "BEGIN:STANDARD",
        "DTSTART:19700101T000000",
        "TZOFFSETFROM:+0900",
        "TZOFFSETTO:+0900",
        "TZNAME:JST",
        "END:STANDARD",
        "END:VTIMEZONE",
        "",
    ]
    .join("\r\n")
}

fn add_text_property(ics_event: &mut icalendar::Event, name: &str, value: &str) {
    let mut prop = Property::new(name, value);
    prop.append_parameter(ValueType::Text);
    ics_event.append_property(prop);
}

/// Add a datetime property with proper formatting based on EventTime variant
fn add_datetime_property(ics_event: &mut icalendar::Event, name: &str, time: &EventTime) {
    match time {
        EventTime::Date(d) => {
            let mut prop = Property::new(name, d.format("%Y%m%d").to_string());
            prop.append_parameter(ValueType::Date);
            ics_event.append_property(prop);
        }
        EventTime::DateTimeZoned { datetime, tzid } => {
            let mut prop = Property::new(name, datetime.format("%Y%m%dT%H%M%S").to_string());
            prop.add_parameter("TZID", tzid);
            ics_event.append_property(prop);
        }
    }
}
