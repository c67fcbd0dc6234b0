use owo_colors::OwoColorize;
use prodsched_core::{EventTime, ScheduleEvent};

/// Format a start/end pair for listings, e.g. "2015-01-05 12:00-13:00".
pub fn format_span(start: &EventTime, end: &EventTime) -> String {
    match (start, end) {
        (EventTime::Date(d), _) => format!("{} {}", d.format("%Y-%m-%d"), "all day".dimmed()),
        (
            EventTime::DateTimeZoned { datetime: s, .. },
            EventTime::DateTimeZoned { datetime: e, .. },
        ) if s == e => s.format("%Y-%m-%d %H:%M").to_string(),
        (
            EventTime::DateTimeZoned { datetime: s, .. },
            EventTime::DateTimeZoned { datetime: e, .. },
        ) if s.date() == e.date() => {
            format!("{}-{}", s.format("%Y-%m-%d %H:%M"), e.format("%H:%M"))
        }
        (
            EventTime::DateTimeZoned { datetime: s, .. },
            EventTime::DateTimeZoned { datetime: e, .. },
        ) => format!("{} - {}", s.format("%Y-%m-%d %H:%M"), e.format("%Y-%m-%d %H:%M")),
        (EventTime::DateTimeZoned { datetime: s, .. }, EventTime::Date(_)) => {
            s.format("%Y-%m-%d %H:%M").to_string()
        }
    }
}

pub fn render_event(event: &ScheduleEvent) -> String {
    let mut line = format!(
        "  {} {}",
        format_span(&event.start, &event.end),
        event.summary
    );
    if !event.genre.is_empty() {
        line.push_str(&format!(" {}", format!("[{}]", event.genre).dimmed()));
    }
    line
}
