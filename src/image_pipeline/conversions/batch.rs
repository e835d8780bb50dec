use std::path::PathBuf;

use tracing::{info, warn};

use crate::image_pipeline::common::timing::PipelineTimings;

/// File name endings picked up by a directory batch
pub const SUPPORTED_INPUT_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".bmp"];

/// True when `file_name` ends, ignoring case, in a supported extension.
pub fn is_supported_input(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    SUPPORTED_INPUT_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}

#[derive(Debug)]
pub struct BatchFailure {
    pub input: PathBuf,
    pub error: String,
}

/// Outcome of a directory batch, in directory-listing order
#[derive(Debug, Default)]
pub struct BatchReport {
    /// `(input, output)` pairs that were written
    pub converted: Vec<(PathBuf, PathBuf)>,
    /// Entries ignored because of their extension or file type
    pub skipped: Vec<PathBuf>,
    /// Only populated when the batch continues past errors
    pub failed: Vec<BatchFailure>,
    pub timings: PipelineTimings,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn log_summary(&self) {
        info!(
            converted = self.converted.len(),
            skipped = self.skipped.len(),
            failed = self.failed.len(),
            "Batch summary"
        );
        for failure in &self.failed {
            warn!(input = %failure.input.display(), "Failed: {}", failure.error);
        }
        self.timings.log_summary();
    }
}
