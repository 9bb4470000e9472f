//! Utilities for cardcheck: small, reusable helpers used across the crate.
//!
//! This module intentionally contains tiny, well-tested helpers shared by the
//! rule table and the record's `Display` implementation.

pub mod text;

// Re-export the helpers at the `utils` module level so callers can
// use `crate::utils::is_blank(...)` etc if they prefer.
pub use text::*;
