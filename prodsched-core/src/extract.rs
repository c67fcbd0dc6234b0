//! Schedule table row extraction.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{ScheduleError, ScheduleResult};

/// Leading rows of the schedule table that hold the header and legend.
pub const HEADER_OFFSET: usize = 3;

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#tabelarea > table").expect("valid table selector"));
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid row selector"));

/// A parsed schedule page.
pub struct SchedulePage {
    html: Html,
    origin: String,
}

/// Handle to one `<tr>` of the schedule table.
#[derive(Clone, Copy)]
pub struct RawRow<'a>(ElementRef<'a>);

impl<'a> RawRow<'a> {
    pub(crate) fn element(&self) -> ElementRef<'a> {
        self.0
    }
}

impl SchedulePage {
    /// Parse page markup. `origin` names the page in error messages.
    pub fn parse(markup: &str, origin: &str) -> Self {
        SchedulePage {
            html: Html::parse_document(markup),
            origin: origin.to_string(),
        }
    }

    /// Rows of the schedule table in document order, header rows skipped.
    ///
    /// Rows of tables nested inside cells are not part of the schedule and
    /// are left out.
    pub fn rows(&self) -> ScheduleResult<impl Iterator<Item = RawRow<'_>>> {
        let table = self
            .html
            .select(&TABLE)
            .next()
            .ok_or_else(|| ScheduleError::MalformedDocument(self.origin.clone()))?;

        let rows = table
            .select(&ROW)
            .filter(move |row| owning_table(*row) == Some(table))
            .skip(HEADER_OFFSET)
            .map(RawRow);

        Ok(rows)
    }
}

fn owning_table(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}
