//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the well-formed sample records so tests across
//! the crate and tests/ directory start from the same baseline and only
//! override the field under test.
#![allow(dead_code)]

use crate::card::CardRecordBuilder;
use crate::types::CardType;

/// A card number of 14 digits carrying the brand's prefix.
#[doc(hidden)]
pub fn sample_card_number(card_type: CardType) -> String {
    let prefix = card_type.prefix();
    let mut number = String::from(prefix);
    // Fill with a fixed digit run so the result has 14 digits
    for d in "2345678912345".chars().skip(prefix.len() - 1) {
        number.push(d);
    }
    number
}

/// Builder pre-filled with a well-formed record of the given brand.
/// Every field passes the structural rules and the prefix matches.
#[doc(hidden)]
pub fn valid_builder(card_type: CardType) -> CardRecordBuilder {
    CardRecordBuilder::new()
        .card_number(sample_card_number(card_type))
        .card_type(card_type)
        .account_number("123456")
        .owner_id("12345")
        .due_amount(15000.0)
        .credit_limit(250000.0)
}

/// Convenience: well-formed VISA builder.
#[doc(hidden)]
pub fn valid_visa() -> CardRecordBuilder {
    valid_builder(CardType::Visa)
}
