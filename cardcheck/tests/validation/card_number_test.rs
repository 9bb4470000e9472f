use crate::common::fixtures;
use cardcheck::{CardRecord, CardType, Constraint};

#[test]
fn valid_card_number_has_no_errors() {
    let card = fixtures::discover().build();
    assert_eq!(fixtures::violation_count(&card), 0);
}

#[test]
fn card_number_with_characters_and_digits() {
    let card = fixtures::discover().card_number("abc34567ghh").build();
    let violations = fixtures::violations(&card);
    assert_eq!(violations.len(), 1);
    let v = violations.iter().next().unwrap();
    assert_eq!(v.field, "cardNumber");
    assert_eq!(v.constraint, Constraint::Pattern);
    assert_eq!(v.message, "must be of 13 to 16 with digits");
}

#[test]
fn card_number_too_short() {
    let card = fixtures::discover().card_number("623456").build();
    assert_eq!(fixtures::violation_count(&card), 1);
}

#[test]
fn card_number_exceeds_max_digits() {
    let card = fixtures::discover()
        .card_number("623456623456123456")
        .build();
    assert_eq!(fixtures::violation_count(&card), 1);

    let card = fixtures::discover()
        .card_number("62345662345612345")
        .build();
    assert_eq!(fixtures::violation_count(&card), 1);
}

#[test]
fn card_number_length_bounds() {
    let thirteen = fixtures::discover().card_number("6234567891234").build();
    let sixteen = fixtures::discover().card_number("6234567891234567").build();
    assert_eq!(fixtures::violation_count(&thirteen), 0);
    assert_eq!(fixtures::violation_count(&sixteen), 0);
}

#[test]
fn card_number_absent_is_blank_only() {
    let card = CardRecord::builder()
        .card_type(CardType::Discover)
        .account_number("123456")
        .owner_id("12345")
        .due_amount(15000.0)
        .credit_limit(250000.0)
        .build();
    let violations = fixtures::violations(&card);
    assert_eq!(violations.len(), 1);
    let v = violations.iter().next().unwrap();
    assert_eq!(v.constraint, Constraint::NotBlank);
    assert_eq!(v.message, "must not be blank");
}

#[test]
fn card_number_blank_is_blank_and_pattern() {
    let card = fixtures::discover().card_number(" ").build();
    let violations = fixtures::violations(&card);
    assert_eq!(violations.len(), 2);
    assert!(violations.iter().all(|v| v.field == "cardNumber"));
}

#[test]
fn card_number_empty_is_blank_and_pattern() {
    let card = fixtures::discover().card_number("").build();
    let constraints: Vec<_> = fixtures::violations(&card)
        .into_iter()
        .map(|v| v.constraint)
        .collect();
    assert_eq!(constraints, vec![Constraint::NotBlank, Constraint::Pattern]);
}

#[test]
fn card_number_unicode_space_is_pattern_only() {
    for number in ["\u{2003}", "\u{00a0}"] {
        let card = fixtures::discover().card_number(number).build();
        let violations = fixtures::violations(&card);
        assert_eq!(violations.len(), 1, "input {:?}", number);
        assert_eq!(violations.iter().next().unwrap().constraint, Constraint::Pattern);
    }
}

#[test]
fn card_number_control_characters_are_blank_and_pattern() {
    let card = fixtures::discover().card_number("\t\u{0007}").build();
    assert_eq!(fixtures::violation_count(&card), 2);
}
