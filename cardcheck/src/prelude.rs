// cardcheck/src/prelude.rs
//! Commonly used types in one import

pub use crate::card::{CardRecord, CardRecordBuilder};
pub use crate::validator::{CardValidator, ValidationReport};
pub use crate::{CardType, Constraint, Error, Result, Violation};

// Re-export small utilities for convenience
pub use crate::utils::{is_blank, mask_card_number};
