//! ICS file generation and parsing.
//!
//! This module handles reading and writing .ics files according to RFC 5545.

mod generate;
mod parse;

pub use generate::{PRODID, generate_calendar_ics, vtimezone};
pub use parse::{ParsedCalendar, parse_calendar};
