/// Row-count bookkeeping for one scrub run.
///
/// Invariant: `input_rows == removed_rows + output_rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub input_rows: usize,
    pub removed_rows: usize,
    pub output_rows: usize,
}

impl Summary {
    pub fn from_counts(input_rows: usize, output_rows: usize) -> Self {
        Self {
            input_rows,
            removed_rows: input_rows - output_rows,
            output_rows,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.input_rows == self.removed_rows + self.output_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts_derives_removed() {
        let summary = Summary::from_counts(10, 7);
        assert_eq!(summary.removed_rows, 3);
        assert!(summary.is_consistent());
    }

    #[test]
    fn zero_counts_are_consistent() {
        let summary = Summary::from_counts(0, 0);
        assert_eq!(summary.removed_rows, 0);
        assert!(summary.is_consistent());
    }

    #[test]
    fn summary_serializes() {
        let summary = Summary::from_counts(3, 1);
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: Summary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round, summary);
    }
}
