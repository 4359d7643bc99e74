// ABOUTME: Structured diagnostics collected by each pipeline stage and the aggregated ScrapeReport.
// ABOUTME: Non-fatal conditions travel as values here instead of being printed where they occur.

use std::fmt;
use std::path::PathBuf;

use crate::config::ProblemConfig;
use crate::store::WriteOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// The pipeline stage that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Limits,
    Samples,
    Store,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Limits => "limits",
            Stage::Samples => "samples",
            Stage::Store => "store",
        };
        write!(f, "{}", s)
    }
}

/// A non-fatal problem found while scraping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub stage: Stage,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            stage,
            message: message.into(),
        }
    }

    pub fn error(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            stage,
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)
    }
}

/// A stage's value together with whatever went wrong while producing it.
#[derive(Debug, Clone)]
pub struct Staged<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Staged<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct ScrapeReport {
    pub problem_id: String,
    pub problem_dir: PathBuf,
    pub config: ProblemConfig,
    /// Config first, then one entry per test case in extraction order.
    pub writes: Vec<WriteOutcome>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScrapeReport {
    pub fn files_written(&self) -> usize {
        self.writes.iter().filter(|w| w.is_ok()).count()
    }

    pub fn files_failed(&self) -> usize {
        self.writes.iter().filter(|w| !w.is_ok()).count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// True if any diagnostic is an error or any file failed to write.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some() || self.files_failed() > 0
    }
}
