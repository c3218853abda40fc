//! Core of the phone-list scrubber: canonicalize phone-like values into
//! comparable keys and drop base rows whose key appears in an exclusion
//! set.
//!
//! Pure and synchronous. No I/O happens here; the CSV boundary lives in
//! `scrub-ingest` and the host surface in `scrub-cli`.

pub mod filter;
pub mod normalize;

pub use filter::{build_exclusion_set, filter_table};
pub use normalize::{MAX_KEY_DIGITS, normalize_phone};
