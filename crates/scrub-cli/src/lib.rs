//! Library components of the `scrub` CLI.

pub mod logging;
pub mod pipeline;
