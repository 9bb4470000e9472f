// cardcheck/src/card/mod.rs
//! The card record value object

use crate::types::{CardType, Violation};
use crate::validator::CardValidator;
use crate::Result;
use std::collections::BTreeSet;
use std::fmt;

pub mod builder;
pub use builder::CardRecordBuilder;

/// A payment card record.
///
/// Fields are fixed at construction (see [`CardRecord::builder`]). Any field
/// may be absent or out of range; use [`CardValidator`] to find out which.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CardRecord {
    card_number: Option<String>,
    card_type: Option<CardType>,
    account_number: Option<String>,
    owner_id: Option<String>,
    due_amount: f64,
    credit_limit: f64,
}

impl CardRecord {
    /// Create a record from all six field values.
    pub fn new(
        card_number: Option<String>,
        card_type: Option<CardType>,
        account_number: Option<String>,
        owner_id: Option<String>,
        due_amount: f64,
        credit_limit: f64,
    ) -> Self {
        Self {
            card_number,
            card_type,
            account_number,
            owner_id,
            due_amount,
            credit_limit,
        }
    }

    /// Start a [`CardRecordBuilder`].
    pub fn builder() -> CardRecordBuilder {
        CardRecordBuilder::new()
    }

    /// Card number, if present.
    pub fn card_number(&self) -> Option<&str> {
        self.card_number.as_deref()
    }
    /// Card brand, if present.
    pub fn card_type(&self) -> Option<CardType> {
        self.card_type
    }
    /// Account number, if present.
    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }
    /// Owner id, if present.
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }
    /// Outstanding amount.
    pub fn due_amount(&self) -> f64 {
        self.due_amount
    }
    /// Credit limit.
    pub fn credit_limit(&self) -> f64 {
        self.credit_limit
    }

    /// Run the structural field rules against this record.
    pub fn validate_fields(&self) -> BTreeSet<Violation> {
        CardValidator::new().validate_fields(self)
    }

    /// Check the card number's prefix against the card type.
    ///
    /// Fails with `InvalidArgument` when the card type is absent.
    pub fn validate(&self) -> Result<bool> {
        CardValidator::new().validate_brand_prefix(self)
    }
}

impl fmt::Display for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card_type = self
            .card_type
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{} {} (account {}, owner {}, due {}, limit {})",
            card_type,
            crate::utils::mask_card_number(self.card_number()),
            self.account_number().unwrap_or("-"),
            self.owner_id().unwrap_or("-"),
            self.due_amount,
            self.credit_limit,
        )
    }
}
