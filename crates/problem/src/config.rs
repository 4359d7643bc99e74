// ABOUTME: Builds the canonical resource-limit configuration from a problem page's info table.
// ABOUTME: Missing tables or unparseable cells degrade to zero-valued fields plus diagnostics.

use serde::{Deserialize, Serialize};

use crate::markup::{MarkupNode, MarkupQuery};
use crate::report::{Diagnostic, Stage, Staged};
use crate::units::{parse_memory_limit_bytes, parse_time_limit_ms};

/// Id of the table holding time and memory limits.
pub const INFO_TABLE_ID: &str = "problem-info";

/// Execution limits. A zero means "unknown, fill in by hand".
///
/// Field order is the emission order in `config.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// Bytes.
    pub memory: u64,
    /// Milliseconds.
    pub cpu_time: u32,
    /// Milliseconds.
    pub real_time: u32,
    /// Bytes.
    pub stack: u32,
    pub n_process: u16,
    /// Bytes.
    pub output: u32,
}

/// The on-disk configuration: a single `limit` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub limit: ResourceLimits,
}

impl ProblemConfig {
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Reads the time-limit and memory-limit cells of the info table, in that order.
fn limit_cells<D: MarkupQuery>(doc: &D) -> Option<(String, String)> {
    let table = doc.find_by_id(INFO_TABLE_ID)?;
    let row = table.first_child("tbody")?.first_child("tr")?;
    let mut cells = row.children("td").into_iter();
    let time = cells.next()?.stripped_text();
    let memory = cells.next()?.stripped_text();
    Some((time, memory))
}

/// Builds the problem configuration from a parsed page.
///
/// Only a single time figure is published, so it is used for both `cpu_time`
/// and `real_time`. Every field that ends up zero gets a warning; a missing
/// info table yields one error and an all-zero config.
pub fn build_config<D, S>(doc: &D, seconds_words: &[S]) -> Staged<ProblemConfig>
where
    D: MarkupQuery,
    S: AsRef<str>,
{
    let mut diagnostics = Vec::new();
    let mut limit = ResourceLimits::default();

    let Some((time_cell, memory_cell)) = limit_cells(doc) else {
        diagnostics.push(Diagnostic::error(
            Stage::Limits,
            format!("could not find problem info table #{INFO_TABLE_ID}; fill in limits manually"),
        ));
        return Staged::new(ProblemConfig { limit }, diagnostics);
    };

    tracing::debug!(time = %time_cell, memory = %memory_cell, "found limit cells");

    match parse_time_limit_ms(&time_cell, seconds_words) {
        Ok(millis) => {
            limit.cpu_time = millis;
            limit.real_time = millis;
        }
        Err(err) => tracing::debug!(%err, "time limit not parsed"),
    }
    if limit.real_time == 0 {
        diagnostics.push(Diagnostic::warning(
            Stage::Limits,
            format!("could not parse time limit {time_cell:?}, please update it manually"),
        ));
    }

    match parse_memory_limit_bytes(&memory_cell) {
        Ok(bytes) => limit.memory = bytes,
        Err(err) => tracing::debug!(%err, "memory limit not parsed"),
    }
    if limit.memory == 0 {
        diagnostics.push(Diagnostic::warning(
            Stage::Limits,
            format!("could not parse memory limit {memory_cell:?}, please update it manually"),
        ));
    }

    Staged::new(ProblemConfig { limit }, diagnostics)
}
