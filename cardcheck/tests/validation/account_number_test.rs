use crate::common::fixtures;
use cardcheck::{CardRecord, CardType, Constraint};

#[test]
fn account_number_absent() {
    let card = CardRecord::builder()
        .card_number("42345678912345")
        .card_type(CardType::Visa)
        .owner_id("12345")
        .due_amount(15000.0)
        .credit_limit(250000.0)
        .build();
    let violations = fixtures::violations(&card);
    assert_eq!(violations.len(), 1);
    let v = violations.iter().next().unwrap();
    assert_eq!(v.field, "accountNumber");
    assert_eq!(v.constraint, Constraint::NotBlank);
    assert_eq!(v.message, "should not be blank");
}

#[test]
fn account_number_empty() {
    let card = fixtures::visa().account_number("").build();
    assert_eq!(fixtures::violation_count(&card), 2);
}

#[test]
fn account_number_blank() {
    let card = fixtures::visa().account_number(" ").build();
    let violations = fixtures::violations(&card);
    assert_eq!(violations.len(), 2);
    assert!(
        violations
            .iter()
            .any(|v| v.message == "should contain with 6 digits")
    );
}

#[test]
fn account_number_wrong_length() {
    for bad in ["12345", "1234567", "12a456"] {
        let card = fixtures::visa().account_number(bad).build();
        assert_eq!(fixtures::violation_count(&card), 1, "input {:?}", bad);
    }
}

#[test]
fn account_number_six_digits() {
    let card = fixtures::visa().account_number("000001").build();
    assert_eq!(fixtures::violation_count(&card), 0);
}

#[test]
fn account_number_non_breaking_space_is_pattern_only() {
    let card = fixtures::visa().account_number("\u{00a0}").build();
    let violations = fixtures::violations(&card);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations.iter().next().unwrap().constraint, Constraint::Pattern);
}
