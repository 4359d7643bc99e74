// ABOUTME: Retrieves a problem page with a single blocking GET carrying a Referer header.
// ABOUTME: Any transport failure or non-success status is fatal; there are no retries.

use reqwest::blocking::Client;
use reqwest::header::REFERER;
use url::Url;

use crate::error::ScrapeError;

/// Maximum accepted page size (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Builds `{origin}/problem/{id}`, with the id percent-encoded as a single path segment.
pub fn problem_url(origin: &str, problem_id: &str) -> Result<Url, ScrapeError> {
    let mut url = Url::parse(origin).map_err(|e| {
        ScrapeError::invalid_url(problem_id, "ProblemUrl", Some(anyhow::anyhow!("{}: {}", origin, e)))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScrapeError::invalid_url(
            problem_id,
            "ProblemUrl",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| {
            ScrapeError::invalid_url(
                problem_id,
                "ProblemUrl",
                Some(anyhow::anyhow!("{} cannot be a base URL", origin)),
            )
        })?
        .pop_if_empty()
        .push("problem")
        .push(problem_id);

    Ok(url)
}

/// Fetches the page at `url` and returns its decoded body.
///
/// The `User-Agent` comes from `client`; `referer` is sent per request.
pub fn fetch_page(
    client: &Client,
    problem_id: &str,
    url: &Url,
    referer: &str,
) -> Result<String, ScrapeError> {
    tracing::debug!(%url, "fetching problem page");

    let response = client
        .get(url.clone())
        .header(REFERER, referer)
        .send()
        .map_err(|e| {
            ScrapeError::fetch(problem_id, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::fetch(
            problem_id,
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
        ));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::fetch(
                problem_id,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let body = response.text().map_err(|e| {
        ScrapeError::fetch(
            problem_id,
            "Fetch",
            Some(anyhow::anyhow!("failed to read body: {}", e)),
        )
    })?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ScrapeError::fetch(
            problem_id,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    tracing::debug!(status = status.as_u16(), bytes = body.len(), "fetched problem page");
    Ok(body)
}
