// cardcheck/src/validator/mod.rs
//! Card record validation.
//!
//! Two checks with two different failure channels:
//!
//! - [`CardValidator::validate_fields`] runs the structural rules and returns
//!   every violation it finds. It never fails.
//! - [`CardValidator::validate_brand_prefix`] checks the card number's prefix
//!   against the card type. A mismatch is `Ok(false)`; a missing card type is
//!   an `Error::InvalidArgument`, since the rule is undefined without one.

use crate::card::CardRecord;
use crate::types::{CardType, Violation};
use crate::{Error, Result};
use std::collections::BTreeSet;

pub mod rules;
pub use rules::{FIELD_RULES, FieldRule};

/// Stateless validator for [`CardRecord`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardValidator;

impl CardValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate every field rule and collect the failures.
    pub fn validate_fields(&self, record: &CardRecord) -> BTreeSet<Violation> {
        let violations: BTreeSet<Violation> =
            FIELD_RULES.iter().filter_map(|rule| rule.apply(record)).collect();

        if violations.is_empty() {
            log::trace!("card record passed all {} field rules", FIELD_RULES.len());
        } else {
            log::debug!("card record has {} field violation(s)", violations.len());
            for v in &violations {
                log::trace!("violation: field={} rule={}", v.field, v.constraint);
            }
        }
        violations
    }

    /// `Ok(true)` iff the card number starts with the prefix of the record's
    /// card type. Card number format is not re-checked; an absent card number
    /// never matches.
    pub fn validate_brand_prefix(&self, record: &CardRecord) -> Result<bool> {
        let Some(card_type) = record.card_type() else {
            log::debug!("brand prefix check on a record without card type");
            return Err(Error::unknown_card_type());
        };
        let ok = record.card_number().is_some_and(|n| card_type.matches(n));
        log::trace!("brand prefix check: type={} ok={}", card_type, ok);
        Ok(ok)
    }

    /// Brand prefix check for callers holding the card type as a string.
    ///
    /// Any name other than `VISA`, `MASTER`, `AMERICAN_EXPRESS` or `DISCOVER`
    /// fails with the same `InvalidArgument` as a missing type.
    pub fn validate_brand_prefix_named(&self, card_type: &str, card_number: &str) -> Result<bool> {
        let card_type: CardType = card_type.parse()?;
        Ok(card_type.matches(card_number))
    }

    /// Structural rules first, then the brand check.
    ///
    /// The brand check is skipped when the card type is absent; that case is
    /// already in the report as a `cardType` violation.
    pub fn validate(&self, record: &CardRecord) -> ValidationReport {
        let violations = self.validate_fields(record);
        let brand_prefix_ok = match record.card_type() {
            Some(_) => self.validate_brand_prefix(record).ok(),
            None => None,
        };
        ValidationReport {
            violations,
            brand_prefix_ok,
        }
    }
}

/// Outcome of [`CardValidator::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    /// Every field rule that failed.
    pub violations: BTreeSet<Violation>,
    /// `None` when the brand check could not run (no card type).
    pub brand_prefix_ok: Option<bool>,
}

impl ValidationReport {
    /// No violations and the card number matches its brand.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty() && self.brand_prefix_ok == Some(true)
    }

    /// Violations reported for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }
}
