//! Row normalization: one table row to one optional schedule entry.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::entry::{ClockTime, ScheduleEntry, compose_description};
use crate::error::{ScheduleError, ScheduleResult};
use crate::extract::RawRow;

static TITLE_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td.article2"));
static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| selector("td.article2 a"));
static GENRE_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td.genre2"));
static DAY_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("td.day2 img"));
static FALLBACK_DAY_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("td.day img"));
static TIME_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td.time2"));
static PERFORMER_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("td.performance2 img"));

static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2}):([0-9]{2})").expect("valid clock pattern"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid cell selector")
}

/// Normalize one table row.
///
/// Returns `None` for rows without a title; those are spacer and
/// decoration rows, not schedule items. A day image whose name carries no
/// day number is an error.
pub fn normalize_row(row: &RawRow<'_>) -> ScheduleResult<Option<ScheduleEntry>> {
    let tr = row.element();

    let Some(title) = cell_text(tr, &TITLE_CELL) else {
        return Ok(None);
    };
    let genre = cell_text(tr, &GENRE_CELL).unwrap_or_default();
    let link = cell_attr(tr, &TITLE_LINK, "href");
    let day = day_of_month(tr)?;
    let time_text = cell_text(tr, &TIME_CELL);
    let performers = cell_attr(tr, &PERFORMER_IMAGE, "alt");

    let (from, to) = match time_text.as_deref() {
        Some(text) => parse_time_range(text),
        None => (None, None),
    };

    let description = compose_description(
        time_text.as_deref(),
        performers.as_deref(),
        &title,
        link.as_deref(),
    );

    Ok(Some(ScheduleEntry {
        day,
        time_text,
        from,
        to,
        genre,
        title,
        link,
        performers,
        description,
    }))
}

/// Trimmed text of the first matching cell; blank cells count as absent.
fn cell_text(tr: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let cell = tr.select(sel).next()?;
    let text = cell.text().collect::<String>();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn cell_attr(tr: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    tr.select(sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

/// Day of month encoded in the day cell's image, e.g. `img/day/05.png`.
/// Rows without a day image are continuation rows.
fn day_of_month(tr: ElementRef<'_>) -> ScheduleResult<Option<u32>> {
    let Some(src) = cell_attr(tr, &DAY_IMAGE, "src")
        .or_else(|| cell_attr(tr, &FALLBACK_DAY_IMAGE, "src"))
    else {
        return Ok(None);
    };

    match day_from_image_src(&src) {
        Some(day) => Ok(Some(day)),
        None => {
            tracing::warn!("Day image {} has no day number", src);
            Err(ScheduleError::UnreadableDayImage { src })
        }
    }
}

/// The two characters immediately before the file extension, as a number.
pub(crate) fn day_from_image_src(src: &str) -> Option<u32> {
    let stem = match src.rfind('.') {
        Some(dot) => &src[..dot],
        None => src,
    };
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() < 2 {
        return None;
    }
    chars[chars.len() - 2..].iter().collect::<String>().parse().ok()
}

/// Replace full-width digits and colon with their ASCII forms.
pub(crate) fn to_ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            '：' => ':',
            other => other,
        })
        .collect()
}

/// Scan the time text for `HH:MM` occurrences.
///
/// No match yields neither bound, a single match is a start time only, and
/// with two or more the first two are start and end.
pub(crate) fn parse_time_range(text: &str) -> (Option<ClockTime>, Option<ClockTime>) {
    let ascii = to_ascii_digits(text);
    let mut times = CLOCK.captures_iter(&ascii).filter_map(|caps| {
        let hour = caps[1].parse().ok()?;
        let minute = caps[2].parse().ok()?;
        Some(ClockTime::new(hour, minute))
    });

    let from = times.next();
    let to = times.next();
    (from, to)
}
