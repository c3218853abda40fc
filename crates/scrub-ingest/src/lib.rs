//! CSV boundary for the phone-list scrubber.
//!
//! Operator files are semicolon-delimited UTF-8 with every cell read as
//! text. The core never touches the filesystem; this crate owns both
//! directions of the boundary.

pub mod csv_table;

pub use csv_table::{CsvOptions, DEFAULT_DELIMITER, first_column_values, read_table, write_table};
