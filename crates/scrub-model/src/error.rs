use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrubError {
    /// The base table lacks the configured key column. This is a
    /// configuration error reported before any filtering happens.
    #[error("base table has no '{0}' column")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, ScrubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_names_the_column() {
        let error = ScrubError::MissingColumn("FONE1_NR".to_string());
        assert_eq!(error.to_string(), "base table has no 'FONE1_NR' column");
    }
}

