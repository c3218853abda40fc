use std::collections::HashSet;

use tracing::debug;

use scrub_model::{Result, ScrubError, Summary, Table};

use crate::normalize::normalize_phone;

/// Normalize every raw exclusion value and collect the keys into a set.
///
/// Duplicates collapse and order is irrelevant; only membership matters
/// downstream.
pub fn build_exclusion_set<I, S>(values: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| normalize_phone(value.as_ref()))
        .collect()
}

/// Partition the base table against an exclusion set.
///
/// Keeps every row whose normalized `key_column` value is absent from
/// `excluded`, in original order and with the original column set. The
/// input table is not touched; the kept rows are returned as a fresh
/// table together with the row-count [`Summary`].
///
/// Single pass with a hash-set membership test per row, so the cost is
/// linear in the base size. Duplicate keys in the base are each
/// evaluated independently; the base itself is never deduplicated.
///
/// # Errors
///
/// [`ScrubError::MissingColumn`] when the base table has no
/// `key_column`. Nothing is filtered in that case.
pub fn filter_table(
    base: &Table,
    key_column: &str,
    excluded: &HashSet<String>,
) -> Result<(Table, Summary)> {
    let key_index = base
        .column_index(key_column)
        .ok_or_else(|| ScrubError::MissingColumn(key_column.to_string()))?;

    let input_rows = base.row_count();
    let mut result = Table::new(base.headers.clone());
    for row in &base.rows {
        let raw = row.get(key_index).map(String::as_str).unwrap_or("");
        let key = normalize_phone(raw);
        if !excluded.contains(&key) {
            result.push_row(row.clone());
        }
    }

    let summary = Summary::from_counts(input_rows, result.row_count());
    debug!(
        input_rows = summary.input_rows,
        removed_rows = summary.removed_rows,
        output_rows = summary.output_rows,
        "filtered base table"
    );
    Ok((result, summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_table(values: &[&str]) -> Table {
        let mut table = Table::new(vec!["NOME".to_string(), "FONE1_NR".to_string()]);
        for (idx, value) in values.iter().enumerate() {
            table.push_row(vec![format!("row{idx}"), (*value).to_string()]);
        }
        table
    }

    #[test]
    fn missing_column_is_a_configuration_error() {
        let table = Table::new(vec!["NOME".to_string()]);
        let excluded = HashSet::new();
        let error = filter_table(&table, "FONE1_NR", &excluded).unwrap_err();
        assert!(matches!(error, ScrubError::MissingColumn(ref column) if column == "FONE1_NR"));
    }

    #[test]
    fn empty_exclusion_set_keeps_everything() {
        let table = base_table(&["11988887777", "12345"]);
        let excluded = HashSet::new();
        let (result, summary) = filter_table(&table, "FONE1_NR", &excluded).expect("filter");
        assert_eq!(result.row_count(), 2);
        assert_eq!(summary, Summary::from_counts(2, 2));
    }

    #[test]
    fn short_rows_read_as_empty_key() {
        let mut table = Table::new(vec!["NOME".to_string(), "FONE1_NR".to_string()]);
        table.push_row(vec!["only-name".to_string()]);
        let excluded = build_exclusion_set(["988887777"]);
        let (result, summary) = filter_table(&table, "FONE1_NR", &excluded).expect("filter");
        assert_eq!(result.row_count(), 1);
        assert!(summary.is_consistent());
    }
}
