//! Month walking: fetch each month's page and route its entries.

use crate::entry::ScheduleEntry;
use crate::error::{ScheduleError, ScheduleResult};
use crate::extract::SchedulePage;
use crate::fetch::PageFetcher;
use crate::month::MonthSpec;
use crate::normalize::normalize_row;
use crate::resolve::resolve_occurrence;
use crate::router::CalendarRouter;

/// Counts from one walk over the month feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub months: usize,
    pub entries: usize,
}

/// Fetch every month in order and route its entries into `router`.
///
/// Any failure aborts the walk; calendars are never written from a
/// partial schedule.
pub async fn walk_months<F: PageFetcher>(
    fetcher: &F,
    months: &[MonthSpec],
    base_url: &str,
    router: &mut CalendarRouter,
) -> ScheduleResult<WalkSummary> {
    let mut summary = WalkSummary::default();

    for month in months {
        let url = month.page_url(base_url);
        tracing::info!("Fetching {}-{:02} from {}", month.year, month.number, url);

        let markup = fetcher.fetch(&url).await?;
        let entries = route_month(month, &markup, &url, router)?;

        tracing::info!("{}-{:02}: {} entries", month.year, month.number, entries);
        summary.months += 1;
        summary.entries += entries;
    }

    Ok(summary)
}

/// Route one month's page. Returns the number of schedule entries found.
///
/// The carried day starts empty for every month; rows without a day image
/// take the day of the closest dated row above them.
pub fn route_month(
    month: &MonthSpec,
    markup: &str,
    origin: &str,
    router: &mut CalendarRouter,
) -> ScheduleResult<usize> {
    let page = SchedulePage::parse(markup, origin);

    let (_, count) = page
        .rows()?
        .try_fold((None, 0), |(carried, count), row| -> ScheduleResult<_> {
            let Some(entry) = normalize_row(&row)? else {
                return Ok((carried, count));
            };
            let day = carry_day(month, &entry, carried)?;
            let occurrence =
                resolve_occurrence(month.year, month.number, day, entry.from, entry.to)?;
            router.route(&entry, &occurrence);
            Ok((Some(day), count + 1))
        })?;

    Ok(count)
}

fn carry_day(
    month: &MonthSpec,
    entry: &ScheduleEntry,
    carried: Option<u32>,
) -> ScheduleResult<u32> {
    entry.day.or(carried).ok_or_else(|| ScheduleError::MissingDayAnchor {
        year: month.year,
        month: month.number,
        title: entry.title.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventTime;
    use crate::month::UrlStyle;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const BASE: &str = "http://schedule.test";

    /// Serves canned pages and records the order of requests.
    struct StaticFetcher {
        pages: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl StaticFetcher {
        fn new(pages: &[(&str, String)]) -> Self {
            StaticFetcher {
                pages: pages
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.clone()))
                    .collect(),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> ScheduleResult<String> {
            self.requested.borrow_mut().push(url.to_string());
            self.pages.get(url).cloned().ok_or_else(|| ScheduleError::Fetch {
                url: url.to_string(),
                reason: "404 Not Found".to_string(),
            })
        }
    }

    fn page(rows: &[String]) -> String {
        format!(
            r#"<html><body><div id="tabelarea"><table>
            <tr><th>日</th><th>時間</th></tr><tr><td></td></tr><tr><td></td></tr>
            {}
            </table></div></body></html>"#,
            rows.join("\n")
        )
    }

    fn row(day: Option<u32>, time: &str, genre: &str, title: &str) -> String {
        let day_cell = match day {
            Some(d) => format!(r#"<td class="day2"><img src="img/{:02}.png"></td>"#, d),
            None => r#"<td class="day2"></td>"#.to_string(),
        };
        format!(
            r#"<tr>{day_cell}<td class="time2">{time}</td><td class="genre2">{genre}</td><td class="article2">{title}</td></tr>"#
        )
    }

    fn start_dates(router: &CalendarRouter, output_id: &str) -> Vec<NaiveDate> {
        router
            .calendar(output_id)
            .unwrap()
            .events()
            .iter()
            .map(|e| match &e.start {
                EventTime::Date(d) => *d,
                EventTime::DateTimeZoned { datetime, .. } => datetime.date(),
            })
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_route_month_carries_day_forward() {
        let month = MonthSpec::new(2015, "january", 1, UrlStyle::A);
        let markup = page(&[
            row(Some(5), "12:00～13:00", "トーク", "ラジオ番組"),
            row(None, "発売日", "CD", "CD発売"),
            row(None, "", "", ""),
            row(Some(9), "20:00", "イベント", "ライブ"),
            row(None, "21:00", "", "アフタートーク"),
        ]);

        let mut router = CalendarRouter::default();
        let count = route_month(&month, &markup, "test", &mut router).unwrap();

        assert_eq!(count, 4);
        assert_eq!(
            start_dates(&router, "schedule.ics"),
            vec![date(2015, 1, 5), date(2015, 1, 5), date(2015, 1, 9), date(2015, 1, 9)]
        );
        assert_eq!(start_dates(&router, "release_day.ics"), vec![date(2015, 1, 5)]);
        assert_eq!(start_dates(&router, "event.ics"), vec![date(2015, 1, 9)]);
    }

    #[test]
    fn test_route_month_first_entry_needs_day() {
        let month = MonthSpec::new(2015, "february", 2, UrlStyle::A);
        let markup = page(&[row(None, "発売日", "CD", "CD発売")]);

        let mut router = CalendarRouter::default();
        let err = route_month(&month, &markup, "test", &mut router).unwrap_err();

        match err {
            ScheduleError::MissingDayAnchor { year, month, title } => {
                assert_eq!((year, month), (2015, 2));
                assert_eq!(title, "CD発売");
            }
            other => panic!("expected MissingDayAnchor, got {other}"),
        }
    }

    #[test]
    fn test_route_month_skips_title_less_rows_before_anchor() {
        let month = MonthSpec::new(2015, "march", 3, UrlStyle::A);
        let markup = page(&[row(None, "", "", ""), row(Some(1), "発売日", "", "CD発売")]);

        let mut router = CalendarRouter::default();
        assert_eq!(route_month(&month, &markup, "test", &mut router).unwrap(), 1);
    }

    #[test]
    fn test_route_month_unreadable_day_image_is_not_carried() {
        let month = MonthSpec::new(2015, "april", 4, UrlStyle::A);
        let markup = page(&[
            row(Some(3), "12:00", "", "ラジオ番組"),
            r#"<tr><td class="day2"><img src="img/blank.png"></td><td class="article2">番組</td></tr>"#
                .to_string(),
        ]);

        let mut router = CalendarRouter::default();
        let err = route_month(&month, &markup, "test", &mut router).unwrap_err();
        assert!(matches!(err, ScheduleError::UnreadableDayImage { .. }));
    }

    #[test]
    fn test_route_month_overnight_entry_rolls_into_next_month() {
        let month = MonthSpec::new(2015, "january", 1, UrlStyle::A);
        let markup = page(&[row(Some(31), "25:30～26:00", "ニコ生", "深夜番組")]);

        let mut router = CalendarRouter::default();
        route_month(&month, &markup, "test", &mut router).unwrap();

        assert_eq!(start_dates(&router, "nico_live.ics"), vec![date(2015, 2, 1)]);
    }

    #[test]
    fn test_route_month_without_table_is_malformed() {
        let month = MonthSpec::new(2015, "january", 1, UrlStyle::A);
        let mut router = CalendarRouter::default();

        let err = route_month(&month, "<html><p>maintenance</p></html>", "page", &mut router)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedDocument(_)));
    }

    #[tokio::test]
    async fn test_walk_months_in_order_and_resets_day() {
        let jan = MonthSpec::new(2015, "january", 1, UrlStyle::A);
        let feb = MonthSpec::new(2015, "02", 2, UrlStyle::C);
        let fetcher = StaticFetcher::new(&[
            (
                "http://schedule.test/2015january.php",
                page(&[row(Some(20), "12:00", "", "一月の番組")]),
            ),
            (
                "http://schedule.test/?ey=2015&em=02",
                page(&[row(None, "12:00", "", "二月の番組")]),
            ),
        ]);

        let mut router = CalendarRouter::default();
        let err = walk_months(&fetcher, &[jan, feb], BASE, &mut router)
            .await
            .unwrap_err();

        // January's day must not leak into February
        assert!(matches!(err, ScheduleError::MissingDayAnchor { month: 2, .. }));
        assert_eq!(
            *fetcher.requested.borrow(),
            vec![
                "http://schedule.test/2015january.php".to_string(),
                "http://schedule.test/?ey=2015&em=02".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_walk_months_summary() {
        let jan = MonthSpec::new(2015, "january", 1, UrlStyle::A);
        let feb = MonthSpec::new(2015, "february", 2, UrlStyle::B);
        let fetcher = StaticFetcher::new(&[
            (
                "http://schedule.test/2015january.php",
                page(&[row(Some(20), "12:00", "", "一月の番組"), row(None, "", "", "続き")]),
            ),
            (
                "http://schedule.test/2015/february.php",
                page(&[row(Some(3), "発売日", "", "二月の発売")]),
            ),
        ]);

        let mut router = CalendarRouter::default();
        let summary = walk_months(&fetcher, &[jan, feb], BASE, &mut router)
            .await
            .unwrap();

        assert_eq!(summary, WalkSummary { months: 2, entries: 3 });
        assert_eq!(
            start_dates(&router, "schedule.ics"),
            vec![date(2015, 1, 20), date(2015, 1, 20), date(2015, 2, 3)]
        );
    }

    #[tokio::test]
    async fn test_walk_months_stops_at_fetch_failure() {
        let jan = MonthSpec::new(2015, "january", 1, UrlStyle::A);
        let feb = MonthSpec::new(2015, "february", 2, UrlStyle::A);
        let fetcher = StaticFetcher::new(&[(
            "http://schedule.test/2015february.php",
            page(&[row(Some(1), "12:00", "", "二月の番組")]),
        )]);

        let mut router = CalendarRouter::default();
        let err = walk_months(&fetcher, &[jan, feb], BASE, &mut router)
            .await
            .unwrap_err();

        assert!(matches!(err, ScheduleError::Fetch { .. }));
        assert_eq!(fetcher.requested.borrow().len(), 1);
        assert!(router.calendar("schedule.ics").unwrap().events().is_empty());
    }
}
