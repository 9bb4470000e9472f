//! Builder for card records

use crate::card::CardRecord;
use crate::types::CardType;

/// Builder for [`CardRecord`].
///
/// String fields that are never set stay absent, amounts default to zero.
/// `build` never fails: an incomplete record is still a record, and
/// reporting what is wrong with it is the validator's job.
#[derive(Debug, Clone, Default)]
pub struct CardRecordBuilder {
    card_number: Option<String>,
    card_type: Option<CardType>,
    account_number: Option<String>,
    owner_id: Option<String>,
    due_amount: f64,
    credit_limit: f64,
}

impl CardRecordBuilder {
    /// Empty builder: strings absent, amounts zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card number.
    pub fn card_number(mut self, card_number: impl Into<String>) -> Self {
        self.card_number = Some(card_number.into());
        self
    }

    /// Accepts a `CardType` or `None` (no brand).
    pub fn card_type(mut self, card_type: impl Into<Option<CardType>>) -> Self {
        self.card_type = card_type.into();
        self
    }

    /// Set the account number.
    pub fn account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    /// Set the owner id.
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Set the outstanding amount.
    pub fn due_amount(mut self, due_amount: f64) -> Self {
        self.due_amount = due_amount;
        self
    }

    /// Set the credit limit.
    pub fn credit_limit(mut self, credit_limit: f64) -> Self {
        self.credit_limit = credit_limit;
        self
    }

    /// Finish the record.
    pub fn build(self) -> CardRecord {
        CardRecord::new(
            self.card_number,
            self.card_type,
            self.account_number,
            self.owner_id,
            self.due_amount,
            self.credit_limit,
        )
    }
}
