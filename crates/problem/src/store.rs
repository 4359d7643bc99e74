// ABOUTME: Writes config.yaml and sample test-case files under <root>/<prefix><id>/.
// ABOUTME: Each file is written independently; a failure is recorded and the rest still go out.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ProblemConfig;
use crate::samples::TestCase;

pub const CONFIG_FILE: &str = "config.yaml";
pub const TESTCASE_DIR: &str = "testcases";

/// Result of writing one file.
#[derive(Debug)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub result: io::Result<()>,
}

impl WriteOutcome {
    pub fn new(path: PathBuf, result: io::Result<()>) -> Self {
        Self { path, result }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Final path component, for status lines.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// The on-disk layout for scraped problems.
#[derive(Debug, Clone)]
pub struct ProblemStore {
    root: PathBuf,
    dir_prefix: String,
}

impl ProblemStore {
    pub fn new(root: impl Into<PathBuf>, dir_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            dir_prefix: dir_prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<prefix><id>`.
    pub fn problem_dir(&self, problem_id: &str) -> PathBuf {
        self.root.join(format!("{}{}", self.dir_prefix, problem_id))
    }

    /// Writes `config.yaml` directly under `problem_dir`.
    pub fn write_config(&self, problem_dir: &Path, config: &ProblemConfig) -> WriteOutcome {
        let path = problem_dir.join(CONFIG_FILE);
        let result = config
            .to_yaml()
            .map_err(io::Error::other)
            .and_then(|yaml| write_file(problem_dir, CONFIG_FILE, &yaml));
        WriteOutcome::new(path, result)
    }

    /// Writes each test case to `problem_dir/testcases/<name>`, consuming them.
    ///
    /// Nothing is created when `cases` is empty.
    pub fn write_testcases<I>(&self, problem_dir: &Path, cases: I) -> Vec<WriteOutcome>
    where
        I: IntoIterator<Item = TestCase>,
    {
        let dir = problem_dir.join(TESTCASE_DIR);
        cases
            .into_iter()
            .map(|case| {
                let result = write_file(&dir, &case.name, &case.content);
                WriteOutcome::new(dir.join(&case.name), result)
            })
            .collect()
    }
}

/// Creates `dir` if needed and writes `contents` to `dir/name`, replacing any existing file.
fn write_file(dir: &Path, name: &str, contents: &str) -> io::Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("refusing to write file named {:?}", name),
        ));
    }
    fs::create_dir_all(dir)?;
    fs::write(dir.join(name), contents)
}
