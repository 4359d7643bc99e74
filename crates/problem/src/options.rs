// ABOUTME: Configuration for a Scraper: judge origin, request identity, output root, unit words.
// ABOUTME: ScraperBuilder provides a fluent API for constructing Scraper instances.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ScrapeError;
use crate::pipeline::Scraper;

pub const DEFAULT_ORIGIN: &str = "https://www.acmicpc.net";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";
pub const DEFAULT_TEST_ROOT: &str = "/workspace/tests";
pub const DEFAULT_DIR_PREFIX: &str = "BOJ-";

/// Configuration options for a [`Scraper`].
#[derive(Debug, Clone)]
pub struct Options {
    pub origin: String,
    pub user_agent: String,
    /// Falls back to `origin` when unset.
    pub referer: Option<String>,
    pub test_root: PathBuf,
    pub dir_prefix: String,
    /// Tokens accepted as the unit of a time limit.
    pub seconds_words: Vec<String>,
    /// `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
    pub http_client: Option<reqwest::blocking::Client>,
}

impl Options {
    pub fn referer(&self) -> &str {
        self.referer.as_deref().unwrap_or(&self.origin)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: None,
            test_root: PathBuf::from(DEFAULT_TEST_ROOT),
            dir_prefix: DEFAULT_DIR_PREFIX.to_string(),
            seconds_words: vec!["초".to_string()],
            timeout: None,
            http_client: None,
        }
    }
}

/// Builder for constructing Scraper instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ScraperBuilder {
    opts: Options,
}

impl ScraperBuilder {
    /// Create a new ScraperBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the judge origin, e.g. `https://www.acmicpc.net`.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.opts.origin = origin.into();
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the Referer header.
    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.opts.referer = Some(referer.into());
        self
    }

    /// Set the directory problem folders are created under.
    pub fn test_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.opts.test_root = root.into();
        self
    }

    pub fn dir_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.opts.dir_prefix = prefix.into();
        self
    }

    /// Replace the accepted time-limit unit words.
    pub fn seconds_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.seconds_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set a request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = Some(timeout);
        self
    }

    /// Use a custom HTTP client. Its own User-Agent takes precedence.
    pub fn http_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Scraper with the configured options.
    pub fn build(self) -> Result<Scraper, ScrapeError> {
        Scraper::new(self.opts)
    }
}

impl Default for ScraperBuilder {
    fn default() -> Self {
        Self::new()
    }
}
