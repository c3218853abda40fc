//! The scrub pipeline: read both tables, build the exclusion set,
//! filter the base, write the result.
//!
//! Everything is local to one call. Concurrent runs share nothing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use scrub_core::{build_exclusion_set, filter_table};
use scrub_ingest::{CsvOptions, first_column_values, read_table, write_table};
use scrub_model::Summary;

/// One scrub request. The exclusion column is positional (first column
/// of the exclusion file); only the base needs a named key column.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub base_path: PathBuf,
    pub exclusion_path: PathBuf,
    pub output_path: PathBuf,
    pub key_column: String,
    pub delimiter: u8,
    pub dry_run: bool,
}

/// Result of a scrub run.
#[derive(Debug)]
pub struct CleanOutcome {
    pub summary: Summary,
    /// Written output file, `None` on a dry run.
    pub output_path: Option<PathBuf>,
}

/// Run the full pipeline for one request.
///
/// # Errors
///
/// Fails when an input file cannot be read, when the base table lacks
/// the key column, or when the output file cannot be written. No
/// partial output is produced: the output file is only written after
/// filtering succeeded.
pub fn run_clean(request: &CleanRequest) -> Result<CleanOutcome> {
    let options = CsvOptions {
        delimiter: request.delimiter,
    };

    let ingest_span = info_span!("ingest");
    let (base, exclusion_values) = ingest_span.in_scope(|| -> Result<_> {
        let base = read_table(&request.base_path, options)
            .with_context(|| format!("load base table: {}", request.base_path.display()))?;
        let exclusion = read_table(&request.exclusion_path, options).with_context(|| {
            format!("load exclusion table: {}", request.exclusion_path.display())
        })?;
        if exclusion.is_empty() {
            warn!("exclusion table has no data rows; nothing will be removed");
        }
        info!(
            base_rows = base.row_count(),
            exclusion_rows = exclusion.row_count(),
            "tables loaded"
        );
        Ok((base, first_column_values(&exclusion)))
    })?;

    let filter_span = info_span!("filter", key_column = %request.key_column);
    let (result, summary) = filter_span.in_scope(|| {
        let excluded = build_exclusion_set(&exclusion_values);
        let outcome = filter_table(&base, &request.key_column, &excluded)?;
        info!(
            excluded_keys = excluded.len(),
            removed_rows = outcome.1.removed_rows,
            "base table filtered"
        );
        anyhow::Ok(outcome)
    })?;

    if request.dry_run {
        info!("dry run; skipping output file");
        return Ok(CleanOutcome {
            summary,
            output_path: None,
        });
    }

    let output_span = info_span!("output", path = %request.output_path.display());
    output_span.in_scope(|| {
        write_table(&result, &request.output_path, options)
            .with_context(|| format!("write output: {}", request.output_path.display()))
    })?;
    info!(rows = summary.output_rows, "output written");

    Ok(CleanOutcome {
        summary,
        output_path: Some(request.output_path.clone()),
    })
}
