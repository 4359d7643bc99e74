// ABOUTME: Maps sample-data fragments (ids like "sample-input-1") to named test cases such as "1.in".
// ABOUTME: Malformed ids are skipped; an empty result or an output without input yields a warning.

use std::collections::HashSet;

use crate::markup::{MarkupNode, MarkupQuery};
use crate::report::{Diagnostic, Stage, Staged};

/// Class carried by every sample input/output element.
pub const SAMPLE_CLASS: &str = "sampledata";

/// Suffix stripped from direction tokens: "input" -> "in", "output" -> "out".
const DIRECTION_SUFFIX: &str = "put";

/// One sample file: `name` is `<index>.<direction>`, `content` is the fragment text as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub content: String,
}

/// The parts of a sample element id that name a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleId<'a> {
    pub direction: &'a str,
    pub index: &'a str,
}

impl SampleId<'_> {
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.index, self.direction)
    }
}

/// Splits `<prefix>-<direction>-<index>` and shortens the direction.
///
/// Returns `None` for ids with fewer than three segments. Any hyphens after the
/// second one stay in the index.
pub fn parse_sample_id(id: &str) -> Option<SampleId<'_>> {
    let mut parts = id.splitn(3, '-');
    let (_prefix, direction, index) = (parts.next()?, parts.next()?, parts.next()?);
    let direction = direction
        .strip_suffix(DIRECTION_SUFFIX)
        .unwrap_or(direction);
    Some(SampleId { direction, index })
}

/// Collects test cases from every `sampledata` element, in document order.
pub fn extract_samples<D: MarkupQuery>(doc: &D) -> Staged<Vec<TestCase>> {
    let fragments = doc.find_by_class(SAMPLE_CLASS);
    tracing::debug!(count = fragments.len(), "found sample fragments");

    let mut cases = Vec::with_capacity(fragments.len());
    for fragment in &fragments {
        let id = fragment.id().unwrap_or_default();
        match parse_sample_id(id) {
            Some(sample) => cases.push(TestCase {
                name: sample.file_name(),
                content: fragment.text(),
            }),
            None => tracing::debug!(id, "skipping sample fragment with malformed id"),
        }
    }

    let mut diagnostics = Vec::new();
    if cases.is_empty() {
        diagnostics.push(Diagnostic::warning(
            Stage::Samples,
            "no sample test case was found; is this expected?",
        ));
    }
    for index in outputs_without_input(&cases) {
        diagnostics.push(Diagnostic::warning(
            Stage::Samples,
            format!("sample {index} has an output but no input"),
        ));
    }

    Staged::new(cases, diagnostics)
}

/// Indices that have an `out` file but no `in` file, in first-seen order.
pub fn outputs_without_input(cases: &[TestCase]) -> Vec<&str> {
    let inputs: HashSet<&str> = cases
        .iter()
        .filter_map(|c| c.name.strip_suffix(".in"))
        .collect();

    let mut seen = HashSet::new();
    cases
        .iter()
        .filter_map(|c| c.name.strip_suffix(".out"))
        .filter(|index| !inputs.contains(index) && seen.insert(*index))
        .collect()
}
