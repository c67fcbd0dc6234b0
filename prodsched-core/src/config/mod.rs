//! Configuration types for prodsched.

mod schedule_config;

pub use schedule_config::ScheduleConfig;
