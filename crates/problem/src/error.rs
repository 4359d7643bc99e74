// ABOUTME: Fatal error types for a scrape run, with an ErrorCode enum and ScrapeError struct.
// ABOUTME: Only failures that abort the run live here; recoverable problems are Diagnostics.

use std::fmt;

/// Error codes for failures that abort a scrape run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidProblemId,
    InvalidUrl,
    Client,
    Fetch,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidProblemId => "invalid problem id",
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Client => "HTTP client setup error",
            ErrorCode::Fetch => "fetch error",
        };
        write!(f, "{}", s)
    }
}

/// The error returned when a run cannot produce any output.
#[derive(Debug, thiserror::Error)]
pub struct ScrapeError {
    pub code: ErrorCode,
    pub problem_id: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.problem_id.is_empty() {
            write!(f, "{}: {}", self.op, self.code)?;
        } else {
            write!(f, "{} {}: {}", self.op, self.problem_id, self.code)?;
        }
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ScrapeError {
    /// Create an InvalidProblemId error.
    pub fn invalid_problem_id(
        problem_id: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::InvalidProblemId,
            problem_id: problem_id.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        problem_id: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::InvalidUrl,
            problem_id: problem_id.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Client error. Not tied to any problem, so `problem_id` is empty.
    pub fn client(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::Client,
            problem_id: String::new(),
            op: op.into(),
            source,
        }
    }

    /// Create a Fetch error.
    pub fn fetch(
        problem_id: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Fetch,
            problem_id: problem_id.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidProblemId error.
    pub fn is_invalid_problem_id(&self) -> bool {
        self.code == ErrorCode::InvalidProblemId
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a Client error.
    pub fn is_client(&self) -> bool {
        self.code == ErrorCode::Client
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_op_id_code_and_source() {
        let err = ScrapeError::fetch("1000", "Fetch", Some(anyhow::anyhow!("HTTP status 404")));
        assert_eq!(err.to_string(), "Fetch 1000: fetch error: HTTP status 404");
        assert!(err.is_fetch());
        assert!(!err.is_invalid_url());
    }

    #[test]
    fn display_without_source() {
        let err = ScrapeError::invalid_problem_id("", "Validate", None);
        assert_eq!(err.to_string(), "Validate: invalid problem id");
        assert!(err.is_invalid_problem_id());
    }

    #[test]
    fn client_error_has_own_code() {
        let err = ScrapeError::client("BuildClient", Some(anyhow::anyhow!("bad header")));
        assert_eq!(err.to_string(), "BuildClient: HTTP client setup error: bad header");
        assert!(err.is_client());
        assert!(!err.is_fetch());
    }
}
