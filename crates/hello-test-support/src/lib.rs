//! Shared test doubles and utilities for hello_app.

mod clock;
mod sink;

pub use clock::FixedClock;
pub use sink::SharedSink;
