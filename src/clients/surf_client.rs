//! Provides the `SurfClient`, which crawls the paginated surf report archive.
//!
//! The number of archive pages is not known up front. The crawl runs as a small
//! state machine:
//!
//! * `FirstPage`: fetch the unnumbered first page. A page with fewer reports than
//!   the archive renders per page is the last one, so the crawl is done. Otherwise
//!   page 2 is fetched and its title, `"<current>/<total> ..."`, gives the page
//!   count. A 404 or a not-found title for page 2 also ends the crawl.
//! * `Counting`: fetch pages `3..=total`, each exactly once. Any failure here is fatal.
//! * `Done`: the accumulated reports are returned.

use crate::config::SurfConfig;
use crate::error::ShorecastError;
use crate::extraction::error::ExtractionError;
use crate::extraction::surf_extractor::{PageCount, SurfExtractor, SurfPage};
use crate::fetching::error::FetchError;
use crate::fetching::http_fetcher::HttpFetcher;
use crate::fetching::Fetch;
use crate::output::table::ResultTable;
use crate::output::writer::write_table;
use crate::planning::surf_planner::{plan_surf, surf_page_target};
use crate::types::date_range::DateRange;
use crate::types::fetch_target::FetchTarget;
use crate::types::records::SurfReport;
use log::{debug, info};
use reqwest::StatusCode;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CrawlState {
    FirstPage,
    Counting { next: u32, total: u32 },
    Done,
}

/// Crawls the surf archive for a date range and writes `date, time, rating` rows to CSV.
///
/// # Examples
///
/// ```no_run
/// use shorecast::{Credentials, DateRange, ShorecastError, SurfClient, SurfConfig, SHORT_US_DATE_FORMAT};
///
/// # fn main() -> Result<(), ShorecastError> {
/// let config = SurfConfig::builder()
///     .credentials(Credentials::new("user", "pass"))
///     .build();
/// let range = DateRange::parse("01/01/16", "12/31/16", SHORT_US_DATE_FORMAT)?;
///
/// let path = SurfClient::new(config)?.run(&range)?;
/// println!("Saved to {}", path.display());
/// # Ok(())
/// # }
/// ```
pub struct SurfClient<F = HttpFetcher> {
    config: SurfConfig,
    fetcher: F,
    extractor: SurfExtractor,
}

impl SurfClient<HttpFetcher> {
    pub fn new(config: SurfConfig) -> Result<Self, ShorecastError> {
        Self::with_fetcher(config, HttpFetcher::new())
    }
}

impl<F: Fetch> SurfClient<F> {
    /// # Errors
    ///
    /// Fails if one of the configured selectors is not valid CSS.
    pub fn with_fetcher(config: SurfConfig, fetcher: F) -> Result<Self, ShorecastError> {
        let extractor = SurfExtractor::new(&config.selectors)?;
        Ok(Self {
            config,
            fetcher,
            extractor,
        })
    }

    /// Walks the archive pages for `range` and returns every report in page order.
    pub fn crawl(&self, range: &DateRange) -> Result<Vec<SurfReport>, ShorecastError> {
        let mut reports = Vec::new();
        let mut state = CrawlState::FirstPage;

        loop {
            state = match state {
                CrawlState::FirstPage => {
                    let first = self.fetch_page(&plan_surf(&self.config, range)?)?;
                    let short_page = first.reports.len() < self.config.page_size;
                    reports.extend(first.reports);

                    if short_page {
                        debug!("First page is not full, the archive has a single page");
                        CrawlState::Done
                    } else {
                        let second = surf_page_target(&self.config, range, 2)?;
                        match self.fetch_optional_page(&second)? {
                            Some(page) => {
                                let total = second_page_total(&page)?;
                                info!("Archive has {} page(s)", total);
                                reports.extend(page.reports);
                                counting_from(3, total)
                            }
                            None => CrawlState::Done,
                        }
                    }
                }
                CrawlState::Counting { next, total } => {
                    let page = self.fetch_page(&surf_page_target(&self.config, range, next)?)?;
                    reports.extend(page.reports);
                    after_page(next, total)
                }
                CrawlState::Done => break,
            };
        }

        info!("Collected {} surf reports", reports.len());
        Ok(reports)
    }

    /// Crawls `range` and writes the reports to `data_dir/file_name`. Returns the written path.
    pub fn run(&self, range: &DateRange) -> Result<PathBuf, ShorecastError> {
        let reports = self.crawl(range)?;
        let mut table = ResultTable::from_reports(&reports)?;
        let path = write_table(&mut table, &self.config.data_dir, &self.config.file_name)?;
        Ok(path)
    }

    fn fetch_page(&self, target: &FetchTarget) -> Result<SurfPage, ShorecastError> {
        let body = self.fetcher.fetch(target)?;
        self.extract_page(target, &body)
    }

    /// Like `fetch_page`, but a 404 means the page does not exist and yields `None`.
    fn fetch_optional_page(
        &self,
        target: &FetchTarget,
    ) -> Result<Option<SurfPage>, ShorecastError> {
        match self.fetcher.fetch(target) {
            Err(FetchError::HttpStatus { status, .. }) if status == StatusCode::NOT_FOUND => {
                debug!("{} does not exist", target);
                Ok(None)
            }
            Err(e) => Err(e.into()),
            Ok(body) => {
                let page = self.extract_page(target, &body)?;
                match page.page_count()? {
                    PageCount::NotFound => {
                        debug!("{} does not exist", target);
                        Ok(None)
                    }
                    PageCount::Pages { .. } => Ok(Some(page)),
                }
            }
        }
    }

    fn extract_page(&self, target: &FetchTarget, body: &str) -> Result<SurfPage, ShorecastError> {
        let page = self.extractor.extract_page(body)?;
        debug!("{} has {} reports", target, page.reports.len());
        Ok(page)
    }
}

/// Reads the page count from page 2's title. The current page it names must lie
/// between 2 and the total.
fn second_page_total(page: &SurfPage) -> Result<u32, ExtractionError> {
    match page.page_count()? {
        PageCount::Pages { current, total } if (2..=total).contains(&current) => Ok(total),
        _ => Err(ExtractionError::UnrecognizedTitle(
            page.title.clone().unwrap_or_default(),
        )),
    }
}

/// State after page `page` was collected.
fn after_page(page: u32, total: u32) -> CrawlState {
    page.checked_add(1).map_or(CrawlState::Done, |next| counting_from(next, total))
}

fn counting_from(next: u32, total: u32) -> CrawlState {
    if next > total {
        CrawlState::Done
    } else {
        CrawlState::Counting { next, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::surf_extractor::tests::{page_html, report_html};
    use crate::fetching::testing::ScriptedFetcher;
    use crate::types::date_range::SHORT_US_DATE_FORMAT;

    const QUERY: &str = "?startdate=01%2F01%2F16&enddate=12%2F31%2F16";
    const ARCHIVE: &str = "http://www.wblivesurf.com/reports/";

    fn first_url() -> String {
        format!("{ARCHIVE}{QUERY}")
    }

    fn page_url(page: u32) -> String {
        format!("{ARCHIVE}page/{page}/{QUERY}")
    }

    fn range() -> DateRange {
        DateRange::parse("01/01/16", "12/31/16", SHORT_US_DATE_FORMAT).unwrap()
    }

    /// A page titled `title` holding `count` reports dated by page and position.
    fn page(title: &str, page: u32, count: usize) -> String {
        let reports: Vec<String> = (0..count)
            .map(|i| report_html(&format!("{page:02}/{:02}/16", i + 1), "06:30 AM", 3, 1))
            .collect();
        page_html(title, &reports)
    }

    fn client(fetcher: &ScriptedFetcher) -> SurfClient<&ScriptedFetcher> {
        SurfClient::with_fetcher(SurfConfig::default(), fetcher).unwrap()
    }

    #[test]
    fn test_short_first_page_stops_without_title() {
        let fetcher = ScriptedFetcher::new().respond(&first_url(), page("Reports", 1, 5));

        let reports = client(&fetcher).crawl(&range()).unwrap();

        assert_eq!(reports.len(), 5);
        assert_eq!(reports[0].rating, 2.5);
        assert_eq!(fetcher.requested(), [first_url()]);
    }

    #[test]
    fn test_counts_pages_from_title() {
        let mut fetcher =
            ScriptedFetcher::new().respond(&first_url(), page("Reports", 1, 16));
        for n in 2..=7 {
            fetcher = fetcher.respond(&page_url(n), page("7/7 Page", n, 16));
        }

        let reports = client(&fetcher).crawl(&range()).unwrap();

        let expected: Vec<String> = std::iter::once(first_url())
            .chain((2..=7).map(page_url))
            .collect();
        assert_eq!(fetcher.requested(), expected);
        assert_eq!(reports.len(), 16 * 7);
        assert_eq!(reports.first().unwrap().date, "01/01/16");
        assert_eq!(reports.last().unwrap().date, "07/16/16");
    }

    #[test]
    fn test_last_page_may_be_short() {
        let fetcher = ScriptedFetcher::new()
            .respond(&first_url(), page("Reports", 1, 16))
            .respond(&page_url(2), page("2/3 Page", 2, 16))
            .respond(&page_url(3), page("3/3 Page", 3, 4));

        let reports = client(&fetcher).crawl(&range()).unwrap();

        assert_eq!(reports.len(), 36);
        assert_eq!(fetcher.requested().len(), 3);
    }

    #[test]
    fn test_two_page_archive_stops_after_title() {
        let fetcher = ScriptedFetcher::new()
            .respond(&first_url(), page("Reports", 1, 16))
            .respond(&page_url(2), page("2/2 Page", 2, 3));

        let reports = client(&fetcher).crawl(&range()).unwrap();

        assert_eq!(reports.len(), 19);
        assert_eq!(fetcher.requested(), [first_url(), page_url(2)]);
    }

    #[test]
    fn test_not_found_title_ends_crawl() {
        let fetcher = ScriptedFetcher::new()
            .respond(&first_url(), page("Reports", 1, 16))
            .respond(&page_url(2), page_html("Page not found", &[]));

        let reports = client(&fetcher).crawl(&range()).unwrap();

        assert_eq!(reports.len(), 16);
        assert_eq!(fetcher.requested().len(), 2);
    }

    #[test]
    fn test_unreadable_title_is_an_error() {
        let fetcher = ScriptedFetcher::new()
            .respond(&first_url(), page("Reports", 1, 16))
            .respond(&page_url(2), page("Surf Reports", 2, 16));

        let err = client(&fetcher).crawl(&range()).unwrap_err();
        assert!(matches!(
            err,
            ShorecastError::Extraction(ExtractionError::UnrecognizedTitle(_))
        ));
    }

    #[test]
    fn test_failed_page_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = ScriptedFetcher::new()
            .respond(&first_url(), page("Reports", 1, 16))
            .respond(&page_url(2), page("2/4 Page", 2, 16))
            .respond(&page_url(3), page("4/4 Page", 3, 16));
        let config = SurfConfig::builder().data_dir(dir.path()).build();

        let err = SurfClient::with_fetcher(config, &fetcher)
            .unwrap()
            .run(&range())
            .unwrap_err();

        assert!(matches!(err, ShorecastError::Fetch(_)));
        assert_eq!(fetcher.requested().last(), Some(&page_url(4)));
        assert!(!dir.path().join("wblive.csv").exists());
    }

    #[test]
    fn test_run_writes_short_archive() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = ScriptedFetcher::new().respond(&first_url(), page("Reports", 1, 2));
        let config = SurfConfig::builder()
            .data_dir(dir.path().join("wblive_data"))
            .build();

        let path = SurfClient::with_fetcher(config, &fetcher)
            .unwrap()
            .run(&range())
            .unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "date,time,rating",
                "01/01/16,06:30 AM,2.5",
                "01/02/16,06:30 AM,2.5"
            ]
        );
    }

    #[test]
    fn test_smaller_page_size() {
        let fetcher = ScriptedFetcher::new().respond(&first_url(), page("Reports", 1, 5));
        let config = SurfConfig::builder().page_size(5).build();

        let reports = SurfClient::with_fetcher(config, &fetcher)
            .unwrap()
            .crawl(&range())
            .unwrap();

        assert_eq!(reports.len(), 5);
        assert_eq!(fetcher.requested(), [first_url(), page_url(2)]);
    }

    #[test]
    fn test_missing_second_page_keeps_full_first_page() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = ScriptedFetcher::new().respond(&first_url(), page("Reports", 1, 16));
        let config = SurfConfig::builder().data_dir(dir.path()).build();

        let path = SurfClient::with_fetcher(config, &fetcher)
            .unwrap()
            .run(&range())
            .unwrap();

        assert_eq!(fetcher.requested(), [first_url(), page_url(2)]);
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 17);
    }

    #[test]
    fn test_missing_later_page_is_fatal() {
        let fetcher = ScriptedFetcher::new()
            .respond(&first_url(), page("Reports", 1, 16))
            .respond(&page_url(2), page("2/3 Page", 2, 16));

        let err = client(&fetcher).crawl(&range()).unwrap_err();

        assert!(matches!(err, ShorecastError::Fetch(_)));
        assert_eq!(fetcher.requested().last(), Some(&page_url(3)));
    }

    #[test]
    fn test_second_page_title_must_be_in_range() {
        for title in ["1/7 Page", "8/7 Page"] {
            let fetcher = ScriptedFetcher::new()
                .respond(&first_url(), page("Reports", 1, 16))
                .respond(&page_url(2), page(title, 2, 16));

            let err = client(&fetcher).crawl(&range()).unwrap_err();

            assert!(matches!(
                err,
                ShorecastError::Extraction(ExtractionError::UnrecognizedTitle(_))
            ));
            assert_eq!(fetcher.requested().len(), 2);
        }
    }

    #[test]
    fn test_page_transitions() {
        assert_eq!(counting_from(3, 2), CrawlState::Done);
        assert_eq!(counting_from(3, 3), CrawlState::Counting { next: 3, total: 3 });
        assert_eq!(after_page(6, 7), CrawlState::Counting { next: 7, total: 7 });
        assert_eq!(after_page(7, 7), CrawlState::Done);
        assert_eq!(after_page(u32::MAX, u32::MAX), CrawlState::Done);
    }
}
