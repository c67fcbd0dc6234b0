//! Calendar routing.
//!
//! Every schedule entry is offered to each output calendar; membership is
//! decided per calendar, so one entry can land in several of them.

use crate::entry::ScheduleEntry;
use crate::event::ScheduleEvent;
use crate::regular::is_regular_program;
use crate::resolve::Occurrence;

/// Classification rule deciding calendar membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Always,
    /// Title matches no regular programme
    Irregular,
    /// Title matches a regular programme
    Regular,
    /// Time text is the release-day label
    ReleaseDay,
    /// Genre contains the given marker
    GenreContains(&'static str),
}

impl Rule {
    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        match self {
            Rule::Always => true,
            Rule::Irregular => !is_regular_program(&entry.title),
            Rule::Regular => is_regular_program(&entry.title),
            Rule::ReleaseDay => entry.is_release_day(),
            Rule::GenreContains(marker) => entry.genre.contains(marker),
        }
    }
}

/// A named output calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDefinition {
    /// Display name (X-WR-CALNAME)
    pub name: &'static str,
    /// Output file name
    pub output_id: &'static str,
    pub rule: Rule,
}

pub const CALENDARS: [CalendarDefinition; 6] = [
    CalendarDefinition {
        name: "プロデューサー予定表",
        output_id: "schedule.ics",
        rule: Rule::Always,
    },
    CalendarDefinition {
        name: "定期配信番組除外版",
        output_id: "schedule_irregular.ics",
        rule: Rule::Irregular,
    },
    CalendarDefinition {
        name: "定期配信番組のみ",
        output_id: "schedule_regular.ics",
        rule: Rule::Regular,
    },
    CalendarDefinition {
        name: "発売日",
        output_id: "release_day.ics",
        rule: Rule::ReleaseDay,
    },
    CalendarDefinition {
        name: "イベント",
        output_id: "event.ics",
        rule: Rule::GenreContains("イベント"),
    },
    CalendarDefinition {
        name: "ニコ生",
        output_id: "nico_live.ics",
        rule: Rule::GenreContains("ニコ生"),
    },
];

/// Accumulated events of one output calendar.
#[derive(Debug, Clone)]
pub struct Calendar {
    pub definition: CalendarDefinition,
    events: Vec<ScheduleEvent>,
}

impl Calendar {
    fn new(definition: CalendarDefinition) -> Self {
        Calendar {
            definition,
            events: Vec::new(),
        }
    }

    /// Events in the order they were routed.
    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }
}

/// Fans schedule entries out to the output calendars.
#[derive(Debug, Clone)]
pub struct CalendarRouter {
    calendars: Vec<Calendar>,
}

impl Default for CalendarRouter {
    fn default() -> Self {
        Self::new(&CALENDARS)
    }
}

impl CalendarRouter {
    pub fn new(definitions: &[CalendarDefinition]) -> Self {
        CalendarRouter {
            calendars: definitions.iter().copied().map(Calendar::new).collect(),
        }
    }

    /// Append an event for `entry` to every calendar whose rule matches.
    ///
    /// Returns how many calendars took the entry.
    pub fn route(&mut self, entry: &ScheduleEntry, occurrence: &Occurrence) -> usize {
        let mut routed = 0;
        for calendar in &mut self.calendars {
            if calendar.definition.rule.matches(entry) {
                calendar.events.push(ScheduleEvent::from_entry(entry, occurrence));
                routed += 1;
            }
        }

        tracing::debug!("Routed {:?} to {} calendar(s)", entry.title, routed);
        routed
    }

    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    pub fn calendar(&self, output_id: &str) -> Option<&Calendar> {
        self.calendars
            .iter()
            .find(|c| c.definition.output_id == output_id)
    }
}
