//! Wire types and pure client logic shared across the TeamPulse UI.
//!
//! Everything in here is target-independent so the validation rules,
//! wire shapes and display formatting can be unit-tested natively.

pub mod date;
pub mod files;
pub mod protocol;

pub use protocol::*;
