// cardcheck/src/lib.rs

//! cardcheck
//!
//! Validation for payment card records: structural field rules and the
//! brand prefix rule.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod test_support;
pub mod types;
pub mod utils;
pub mod validator;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
