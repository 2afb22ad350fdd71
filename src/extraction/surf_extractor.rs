//! HTML extraction for the surf report archive.
//!
//! Each archive page renders a list of report elements. Every report carries a date
//! label, a time label and a star rating; the rating container holding the current
//! conditions renders one icon per star, with partially filled stars flagged as half
//! icons. Pages are titled `"<current>/<total> ..."` which is how the crawler learns
//! how many pages exist.

use crate::extraction::error::ExtractionError;
use crate::types::records::SurfReport;
use scraper::{ElementRef, Html, Selector};

/// Number of characters of the rendered time label that make up the time.
const TIME_LABEL_LEN: usize = 8;

/// Title fragments the archive uses when a page index does not exist.
const NOT_FOUND_MARKERS: [&str; 2] = ["not found", "nothing found"];

/// CSS selectors describing the archive markup.
///
/// `date`, `time` and `rating_container` are resolved inside each report;
/// `icon` and `half_icon` inside the rating container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfSelectors {
    pub report: String,
    pub date: String,
    pub time: String,
    pub rating_container: String,
    pub icon: String,
    pub half_icon: String,
}

impl Default for SurfSelectors {
    fn default() -> Self {
        Self {
            report: "article".to_string(),
            date: ".postDate".to_string(),
            time: ".postTime".to_string(),
            rating_container: ".rating.current".to_string(),
            icon: "i".to_string(),
            half_icon: ".half".to_string(),
        }
    }
}

/// What a page title says about the extent of the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCount {
    /// The requested page index does not exist.
    NotFound,
    Pages { current: u32, total: u32 },
}

/// Everything read from one archive page.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfPage {
    pub reports: Vec<SurfReport>,
    pub title: Option<String>,
}

impl SurfPage {
    /// Reads the page count from the page title.
    pub fn page_count(&self) -> Result<PageCount, ExtractionError> {
        self.title
            .as_deref()
            .ok_or(ExtractionError::MissingTitle)
            .and_then(parse_page_title)
    }
}

/// Compiled selectors; build once per crawl.
pub struct SurfExtractor {
    report: Selector,
    date: Selector,
    time: Selector,
    rating_container: Selector,
    icon: Selector,
    half_icon: Selector,
    title: Selector,
}

impl SurfExtractor {
    pub fn new(selectors: &SurfSelectors) -> Result<Self, ExtractionError> {
        Ok(Self {
            report: compile(&selectors.report)?,
            date: compile(&selectors.date)?,
            time: compile(&selectors.time)?,
            rating_container: compile(&selectors.rating_container)?,
            icon: compile(&selectors.icon)?,
            half_icon: compile(&selectors.half_icon)?,
            title: compile("title")?,
        })
    }

    /// Parses one archive page: its reports in document order, plus its title.
    pub fn extract_page(&self, html: &str) -> Result<SurfPage, ExtractionError> {
        let document = Html::parse_document(html);

        let reports = document
            .select(&self.report)
            .enumerate()
            .map(|(index, report)| self.extract_report(index, report))
            .collect::<Result<Vec<_>, _>>()?;

        let title = document
            .select(&self.title)
            .next()
            .map(|title| rendered_text(title).trim().to_string());

        Ok(SurfPage { reports, title })
    }

    fn extract_report(
        &self,
        index: usize,
        report: ElementRef<'_>,
    ) -> Result<SurfReport, ExtractionError> {
        let date = report
            .select(&self.date)
            .next()
            .ok_or(ExtractionError::MissingElement {
                index,
                element: "date label",
            })?;
        let time = report
            .select(&self.time)
            .next()
            .ok_or(ExtractionError::MissingElement {
                index,
                element: "time label",
            })?;
        let rating = report
            .select(&self.rating_container)
            .next()
            .ok_or(ExtractionError::MissingElement {
                index,
                element: "current rating",
            })?;

        let time_label: String = rendered_text(time)
            .trim_start()
            .chars()
            .take(TIME_LABEL_LEN)
            .collect();

        Ok(SurfReport {
            date: rendered_text(date).trim().to_string(),
            time: time_label.trim_end().to_string(),
            rating: self.rating(rating),
        })
    }

    /// Every icon counts as one star, every half icon takes half a star back.
    fn rating(&self, container: ElementRef<'_>) -> f64 {
        let icons = container.select(&self.icon).count() as f64;
        let halves = container.select(&self.half_icon).count() as f64;
        icons - 0.5 * halves
    }
}

/// Parses a title such as `"7/7 Page"` or `"Page not found"`.
pub fn parse_page_title(title: &str) -> Result<PageCount, ExtractionError> {
    let lowered = title.to_lowercase();
    if NOT_FOUND_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return Ok(PageCount::NotFound);
    }

    let unrecognized = || ExtractionError::UnrecognizedTitle(title.to_string());
    let counter = title.split_whitespace().next().ok_or_else(unrecognized)?;
    let (current, total) = counter.split_once('/').ok_or_else(unrecognized)?;
    Ok(PageCount::Pages {
        current: current.parse().map_err(|_| unrecognized())?,
        total: total.parse().map_err(|_| unrecognized())?,
    })
}

fn compile(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn rendered_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
