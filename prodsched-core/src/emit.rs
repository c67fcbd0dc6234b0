//! Writing output calendars.

use std::path::{Path, PathBuf};

use crate::error::{ScheduleError, ScheduleResult};
use crate::ics::generate_calendar_ics;
use crate::router::CalendarRouter;

/// Destination for serialized calendars.
pub trait CalendarWriter {
    fn write(&self, output_id: &str, bytes: &[u8]) -> ScheduleResult<()>;
}

/// Writes each calendar to `<dir>/<output_id>`.
pub struct DirectoryWriter {
    dir: PathBuf,
}

impl DirectoryWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectoryWriter { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CalendarWriter for DirectoryWriter {
    fn write(&self, output_id: &str, bytes: &[u8]) -> ScheduleResult<()> {
        let write_err = |source: std::io::Error| ScheduleError::Write {
            output_id: output_id.to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(write_err)?;
        std::fs::write(self.dir.join(output_id), bytes).map_err(write_err)?;
        Ok(())
    }
}

/// Serialize every routed calendar and hand it to `writer`.
///
/// Returns `(output_id, event count)` per calendar, in definition order.
pub fn emit_calendars<W: CalendarWriter>(
    router: &CalendarRouter,
    writer: &W,
) -> ScheduleResult<Vec<(&'static str, usize)>> {
    let mut written = Vec::with_capacity(router.calendars().len());

    for calendar in router.calendars() {
        let output_id = calendar.definition.output_id;
        let content = generate_calendar_ics(calendar)?;
        writer.write(output_id, content.as_bytes())?;

        tracing::info!("Wrote {} ({} events)", output_id, calendar.events().len());
        written.push((output_id, calendar.events().len()));
    }

    Ok(written)
}
