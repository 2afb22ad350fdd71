use crate::config::SurfConfig;
use crate::types::date_range::{DateRange, SHORT_US_DATE_FORMAT};
use crate::types::error::ParseError;
use crate::types::fetch_target::FetchTarget;
use url::Url;

/// Builds the request for the first, unnumbered archive page of `range`.
///
/// Later pages are not known up front; the crawler asks for them with
/// [`surf_page_target`] once it has learned how many there are.
pub fn plan_surf(config: &SurfConfig, range: &DateRange) -> Result<FetchTarget, ParseError> {
    let url = with_date_query(archive_base(config)?, range);
    Ok(FetchTarget::new(url, "surf archive first page").with_credentials(config.credentials.clone()))
}

/// Builds the request for archive page `page` (`<archive>/page/<n>/`).
pub fn surf_page_target(
    config: &SurfConfig,
    range: &DateRange,
    page: u32,
) -> Result<FetchTarget, ParseError> {
    let base = archive_base(config)?;
    let segment = format!("page/{page}/");
    let url = base
        .join(&segment)
        .map_err(|e| ParseError::InvalidUrl(format!("{base}{segment}"), e))?;
    Ok(
        FetchTarget::new(with_date_query(url, range), format!("surf archive page {page}"))
            .with_page(page)
            .with_credentials(config.credentials.clone()),
    )
}

/// Parses the archive URL and makes sure its path ends in `/` so page segments join under it.
fn archive_base(config: &SurfConfig) -> Result<Url, ParseError> {
    let mut url = Url::parse(&config.archive_url)
        .map_err(|e| ParseError::InvalidUrl(config.archive_url.clone(), e))?;
    url.set_query(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn with_date_query(mut url: Url, range: &DateRange) -> Url {
    url.query_pairs_mut()
        .append_pair("startdate", &range.start().format(SHORT_US_DATE_FORMAT).to_string())
        .append_pair("enddate", &range.end().format(SHORT_US_DATE_FORMAT).to_string());
    url
}
