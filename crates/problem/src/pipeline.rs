// ABOUTME: The Scraper ties fetch, limit parsing, sample extraction and persistence together.
// ABOUTME: Fatal failures return Err before anything is written; everything else lands in the report.

use reqwest::blocking::Client as HttpClient;

use crate::config::build_config;
use crate::error::ScrapeError;
use crate::fetch::{fetch_page, problem_url};
use crate::markup::HtmlDocument;
use crate::options::{Options, ScraperBuilder};
use crate::report::{Diagnostic, ScrapeReport, Stage};
use crate::samples::extract_samples;
use crate::store::ProblemStore;

/// Scrapes problem pages into the local test layout.
pub struct Scraper {
    opts: Options,
    http_client: HttpClient,
    store: ProblemStore,
}

impl Scraper {
    /// Create a new ScraperBuilder for configuring the scraper.
    pub fn builder() -> ScraperBuilder {
        ScraperBuilder::new()
    }

    /// Create a new Scraper with the given options.
    pub fn new(opts: Options) -> Result<Self, ScrapeError> {
        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => {
                let mut builder = HttpClient::builder()
                    .user_agent(&opts.user_agent)
                    .gzip(true)
                    .brotli(true)
                    .deflate(true);
                if let Some(timeout) = opts.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(|e| {
                    ScrapeError::client("BuildClient", Some(anyhow::anyhow!("{}", e)))
                })?
            }
        };

        let store = ProblemStore::new(opts.test_root.clone(), opts.dir_prefix.clone());

        Ok(Self {
            opts,
            http_client,
            store,
        })
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn store(&self) -> &ProblemStore {
        &self.store
    }

    /// Fetches the problem page and writes its config and samples.
    ///
    /// Returns `Err` only when the identifier is unusable or the page cannot be
    /// retrieved; in that case nothing has been written.
    pub fn scrape(&self, problem_id: &str) -> Result<ScrapeReport, ScrapeError> {
        validate_problem_id(problem_id)?;
        let url = problem_url(&self.opts.origin, problem_id)?;
        let html = fetch_page(&self.http_client, problem_id, &url, self.opts.referer())?;
        self.scrape_html(problem_id, &html)
    }

    /// Runs extraction and persistence on an already retrieved page.
    pub fn scrape_html(&self, problem_id: &str, html: &str) -> Result<ScrapeReport, ScrapeError> {
        validate_problem_id(problem_id)?;

        let (config, cases, mut diagnostics) = {
            let doc = HtmlDocument::parse(html);
            let config = build_config(&doc, self.opts.seconds_words.as_slice());
            let samples = extract_samples(&doc);

            let mut diagnostics = config.diagnostics;
            diagnostics.extend(samples.diagnostics);
            (config.value, samples.value, diagnostics)
        };

        let problem_dir = self.store.problem_dir(problem_id);
        tracing::debug!(dir = %problem_dir.display(), cases = cases.len(), "writing problem");

        let mut writes = vec![self.store.write_config(&problem_dir, &config)];
        writes.extend(self.store.write_testcases(&problem_dir, cases));

        for failed in writes.iter().filter(|w| !w.is_ok()) {
            if let Err(err) = &failed.result {
                diagnostics.push(Diagnostic::error(
                    Stage::Store,
                    format!("failed to create {}: {}", failed.file_name(), err),
                ));
            }
        }

        Ok(ScrapeReport {
            problem_id: problem_id.to_string(),
            problem_dir,
            config,
            writes,
            diagnostics,
        })
    }
}

/// Rejects identifiers that would escape the test root, alter the request URL,
/// or name a different directory than the page they came from.
pub fn validate_problem_id(problem_id: &str) -> Result<(), ScrapeError> {
    let reason = if problem_id.trim().is_empty() {
        Some("problem id is empty")
    } else if problem_id.trim() != problem_id {
        Some("problem id must not start or end with whitespace")
    } else if problem_id.contains(['/', '\\']) {
        Some("problem id must not contain path separators")
    } else if problem_id.contains("..") {
        Some("problem id must not contain \"..\"")
    } else if problem_id.contains(['?', '#']) {
        Some("problem id must not contain '?' or '#'")
    } else if problem_id.chars().any(char::is_control) {
        Some("problem id must not contain control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ScrapeError::invalid_problem_id(
            problem_id,
            "Validate",
            Some(anyhow::anyhow!(reason)),
        )),
        None => Ok(()),
    }
}
