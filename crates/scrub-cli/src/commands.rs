use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use scrub_cli::pipeline::{CleanRequest, run_clean};

use crate::cli::CleanArgs;
use crate::types::CleanResult;

pub fn run_clean_command(args: &CleanArgs) -> Result<CleanResult> {
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{}'", args.delimiter);
    }
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.base));

    let request = CleanRequest {
        base_path: args.base.clone(),
        exclusion_path: args.exclusion.clone(),
        output_path,
        key_column: args.key_column.clone(),
        delimiter: args.delimiter as u8,
        dry_run: args.dry_run,
    };
    let outcome = run_clean(&request)?;

    Ok(CleanResult {
        base_path: args.base.clone(),
        output_path: outcome.output_path,
        key_column: args.key_column.clone(),
        summary: outcome.summary,
        dry_run: args.dry_run,
    })
}

/// `<stem>_cleaned.csv` next to the base file.
fn default_output_path(base: &Path) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "base".to_string());
    base.with_file_name(format!("{stem}_cleaned.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_base() {
        let path = default_output_path(Path::new("/data/contacts.csv"));
        assert_eq!(path, PathBuf::from("/data/contacts_cleaned.csv"));
    }

    #[test]
    fn default_output_without_extension() {
        let path = default_output_path(Path::new("contacts"));
        assert_eq!(path, PathBuf::from("contacts_cleaned.csv"));
    }
}
