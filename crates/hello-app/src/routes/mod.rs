//! Route modules.

pub mod greeting;
