//! Structural field rules
//!
//! Each rule checks one field for one constraint. Rules are independent: all
//! of them run, and a field may fail more than one.

use crate::card::CardRecord;
use crate::constants::{
    ACCOUNT_NUMBER_PATTERN, CARD_NUMBER_PATTERN, FIELD_ACCOUNT_NUMBER, FIELD_CARD_NUMBER,
    FIELD_CARD_TYPE, FIELD_CREDIT_LIMIT, FIELD_DUE_AMOUNT, FIELD_OWNER_ID,
};
use crate::types::{Constraint, Violation};
use crate::utils::is_blank;
use regex::Regex;
use std::sync::OnceLock;

/// One entry of the rule table. `check` returns `true` when the record
/// passes.
#[derive(Clone, Copy)]
pub struct FieldRule {
    /// Field the rule checks
    pub field: &'static str,
    /// Rule kind
    pub constraint: Constraint,
    /// Message of the violation raised on failure
    pub message: &'static str,
    check: fn(&CardRecord) -> bool,
}

impl FieldRule {
    /// Evaluate against `record`; `Some` on failure.
    pub fn apply(&self, record: &CardRecord) -> Option<Violation> {
        if (self.check)(record) {
            None
        } else {
            Some(Violation::new(self.field, self.constraint, self.message))
        }
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("constraint", &self.constraint)
            .field("message", &self.message)
            .finish()
    }
}

/// Rules in evaluation order.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: FIELD_CARD_NUMBER,
        constraint: Constraint::NotBlank,
        message: "must not be blank",
        check: card_number_not_blank,
    },
    FieldRule {
        field: FIELD_CARD_NUMBER,
        constraint: Constraint::Pattern,
        message: "must be of 13 to 16 with digits",
        check: card_number_pattern,
    },
    FieldRule {
        field: FIELD_CARD_TYPE,
        constraint: Constraint::NotNull,
        message: "should not be empty",
        check: card_type_present,
    },
    FieldRule {
        field: FIELD_ACCOUNT_NUMBER,
        constraint: Constraint::NotBlank,
        message: "should not be blank",
        check: account_number_not_blank,
    },
    FieldRule {
        field: FIELD_ACCOUNT_NUMBER,
        constraint: Constraint::Pattern,
        message: "should contain with 6 digits",
        check: account_number_pattern,
    },
    FieldRule {
        field: FIELD_OWNER_ID,
        constraint: Constraint::NotBlank,
        message: "should not be blank",
        check: owner_id_not_blank,
    },
    FieldRule {
        field: FIELD_DUE_AMOUNT,
        constraint: Constraint::PositiveOrZero,
        message: "should be greater than or equal to zero",
        check: due_amount_positive_or_zero,
    },
    FieldRule {
        field: FIELD_CREDIT_LIMIT,
        constraint: Constraint::Positive,
        message: "should be greater than zero",
        check: credit_limit_positive,
    },
];

fn card_number_regex() -> &'static Regex {
    static CARD_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    CARD_NUMBER_REGEX.get_or_init(|| Regex::new(CARD_NUMBER_PATTERN).unwrap())
}

fn account_number_regex() -> &'static Regex {
    static ACCOUNT_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    ACCOUNT_NUMBER_REGEX.get_or_init(|| Regex::new(ACCOUNT_NUMBER_PATTERN).unwrap())
}

/// Absent values pass: presence is the blank rule's concern.
fn matches_if_present(value: Option<&str>, regex: &Regex) -> bool {
    value.is_none_or(|s| regex.is_match(s))
}

fn card_number_not_blank(r: &CardRecord) -> bool {
    !is_blank(r.card_number())
}

fn card_number_pattern(r: &CardRecord) -> bool {
    matches_if_present(r.card_number(), card_number_regex())
}

fn card_type_present(r: &CardRecord) -> bool {
    r.card_type().is_some()
}

fn account_number_not_blank(r: &CardRecord) -> bool {
    !is_blank(r.account_number())
}

fn account_number_pattern(r: &CardRecord) -> bool {
    matches_if_present(r.account_number(), account_number_regex())
}

fn owner_id_not_blank(r: &CardRecord) -> bool {
    !is_blank(r.owner_id())
}

// NaN compares false and so fails both numeric rules
fn due_amount_positive_or_zero(r: &CardRecord) -> bool {
    r.due_amount() >= 0.0
}

fn credit_limit_positive(r: &CardRecord) -> bool {
    r.credit_limit() > 0.0
}
