//! Data model for phone-list scrubbing.
//!
//! Everything here is a plain in-memory value created fresh per run and
//! dropped when the run finishes; there is no cross-run state.

pub mod error;
pub mod summary;
pub mod table;

pub use error::{Result, ScrubError};
pub use summary::Summary;
pub use table::Table;
