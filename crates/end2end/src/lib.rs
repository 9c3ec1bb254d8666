//! End-to-end probe for hello_app.
//!
//! A single-shot acceptance check: GET each target, require `200 OK` and a
//! greeting in the body, and stop at the first failure. Nothing is retried.

pub mod config;
pub mod error;
pub mod probe;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use probe::{GREETING_MARKER, ProbeReport, Prober, completion_line, exit_code, run, run_timed};
