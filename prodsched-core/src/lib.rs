//! Producer schedule scraping pipeline.
//!
//! Turns the monthly HTML schedule tables into filtered iCalendar files:
//! - `extract` and `normalize` turn table rows into `ScheduleEntry` values
//! - `walker` fetches each month and carries blank day cells forward
//! - `resolve` anchors entries in time (JST, overnight hours)
//! - `router` files each entry into every calendar whose rule matches
//! - `emit` and `ics` write the calendars out (and read them back)

pub mod config;
pub mod emit;
pub mod entry;
pub mod error;
pub mod event;
pub mod extract;
pub mod fetch;
pub mod ics;
pub mod month;
pub mod normalize;
pub mod regular;
pub mod resolve;
pub mod router;
pub mod walker;

pub use config::ScheduleConfig;
pub use entry::{ClockTime, ScheduleEntry};
pub use error::{ScheduleError, ScheduleResult};
pub use event::{EventTime, ScheduleEvent};
pub use month::{MonthSpec, UrlStyle};
pub use router::{CALENDARS, CalendarDefinition, CalendarRouter};
