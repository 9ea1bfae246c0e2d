//! Settings for a single batch run.

use std::path::PathBuf;

/// Input root used when `--input` is not given.
pub const DEFAULT_INPUT: &str = "Content";

/// File extension scanned for when `--extension` is not given.
pub const DEFAULT_EXTENSION: &str = "xnb";

/// Everything [`run_batch`](crate::batch::run_batch) needs to know about a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory tree to scan.
    pub input_root: PathBuf,
    /// Directory the mirrored output tree is written under.
    pub output_root: PathBuf,
    /// Extension to match, without the leading dot. Matched case-insensitively.
    pub extension: String,
    /// Process files on the rayon thread pool.
    pub parallel: bool,
    /// Report per-file failures through the exit code.
    pub strict: bool,
}

impl RunConfig {
    /// A sequential, non-strict run writing its output next to the inputs.
    pub fn new(input_root: impl Into<PathBuf>) -> Self {
        let input_root = input_root.into();
        Self {
            output_root: input_root.clone(),
            input_root,
            extension: DEFAULT_EXTENSION.into(),
            parallel: false,
            strict: false,
        }
    }

    pub fn with_output(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    /// Sets the extension to scan for. A leading `.` is ignored.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_owned();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}
