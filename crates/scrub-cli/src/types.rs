use std::path::PathBuf;

use scrub_model::Summary;

/// Everything the summary printer needs about a finished run.
#[derive(Debug)]
pub struct CleanResult {
    pub base_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub key_column: String,
    pub summary: Summary,
    pub dry_run: bool,
}
