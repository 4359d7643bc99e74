// ABOUTME: Library entry point for scraping judge problem pages into local test directories.
// ABOUTME: Re-exports the public API: Scraper, ScraperBuilder, Options, ScrapeReport, ScrapeError.

//! Problem page scraper.
//!
//! Fetches a problem page, converts its time and memory limits into a
//! canonical `config.yaml`, and writes every public sample as
//! `testcases/<index>.<in|out>`.
//!
//! # Example
//!
//! ```no_run
//! use boj_problem::{ScrapeError, Scraper};
//!
//! fn main() -> Result<(), ScrapeError> {
//!     let scraper = Scraper::builder().test_root("/tmp/tests").build()?;
//!     let report = scraper.scrape("1000")?;
//!     println!("wrote {} files", report.files_written());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod markup;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod samples;
pub mod store;
pub mod units;

pub use crate::config::{build_config, ProblemConfig, ResourceLimits};
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::markup::{HtmlDocument, MarkupNode, MarkupQuery};
pub use crate::options::{Options, ScraperBuilder};
pub use crate::pipeline::Scraper;
pub use crate::report::{Diagnostic, ScrapeReport, Severity, Stage, Staged};
pub use crate::samples::{extract_samples, TestCase};
pub use crate::store::{ProblemStore, WriteOutcome};
pub use crate::units::{parse_memory_limit_bytes, parse_time_limit_ms, ByteSize, MemoryUnit, UnitError};
