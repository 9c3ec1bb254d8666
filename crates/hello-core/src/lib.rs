//! Hello Core — the clock capability and time formatting.
//!
//! The HTTP service and the heartbeat both render "now" through this crate,
//! so tests can swap in a deterministic clock without touching either.

pub mod clock;

pub use clock::{Clock, SystemClock, format_hms, now};
