// fixtures.rs — provides commonly used sample records

use cardcheck::card::{CardRecord, CardRecordBuilder};
use cardcheck::test_support::valid_builder;
use cardcheck::types::{CardType, Violation};
use cardcheck::validator::CardValidator;
use std::collections::BTreeSet;

pub fn visa() -> CardRecordBuilder {
    valid_builder(CardType::Visa)
}

pub fn discover() -> CardRecordBuilder {
    valid_builder(CardType::Discover)
}

pub fn violations(card: &CardRecord) -> BTreeSet<Violation> {
    CardValidator::new().validate_fields(card)
}

pub fn violation_count(card: &CardRecord) -> usize {
    violations(card).len()
}
