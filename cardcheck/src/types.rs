// cardcheck/src/types.rs
//! Card brands and validation violations

use crate::Error;
use crate::constants::{AMERICAN_EXPRESS_PREFIX, DISCOVER_PREFIX, MASTER_PREFIX, VISA_PREFIX};
use derive_more::Display;
use std::str::FromStr;

/// Card brand (network)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CardType {
    /// Visa, prefix `4`
    #[display(fmt = "VISA")]
    Visa,
    /// Mastercard, prefix `5`
    #[display(fmt = "MASTER")]
    Master,
    /// American Express, prefix `37`
    #[display(fmt = "AMERICAN_EXPRESS")]
    AmericanExpress,
    /// Discover, prefix `6`
    #[display(fmt = "DISCOVER")]
    Discover,
}

impl CardType {
    /// Every brand, in declaration order.
    pub const ALL: [CardType; 4] = [
        CardType::Visa,
        CardType::Master,
        CardType::AmericanExpress,
        CardType::Discover,
    ];

    /// Leading digits a card number of this brand must start with.
    pub const fn prefix(self) -> &'static str {
        match self {
            CardType::Visa => VISA_PREFIX,
            CardType::Master => MASTER_PREFIX,
            CardType::AmericanExpress => AMERICAN_EXPRESS_PREFIX,
            CardType::Discover => DISCOVER_PREFIX,
        }
    }

    /// Check `card_number` against this brand's prefix. Length and digit
    /// format are not looked at.
    pub fn matches(self, card_number: &str) -> bool {
        card_number.starts_with(self.prefix())
    }
}

impl FromStr for CardType {
    type Err = Error;

    /// Parse a canonical brand name (`VISA`, `MASTER`, `AMERICAN_EXPRESS`,
    /// `DISCOVER`). Anything else is an `InvalidArgument`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VISA" => Ok(CardType::Visa),
            "MASTER" => Ok(CardType::Master),
            "AMERICAN_EXPRESS" => Ok(CardType::AmericanExpress),
            "DISCOVER" => Ok(CardType::Discover),
            _ => Err(Error::unknown_card_type()),
        }
    }
}

/// Rule kind a [`Violation`] was raised by
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
    /// Value must be present and contain a character above U+0020
    #[display(fmt = "NotBlank")]
    NotBlank,
    /// Value must be present
    #[display(fmt = "NotNull")]
    NotNull,
    /// Present value must fully match a pattern
    #[display(fmt = "Pattern")]
    Pattern,
    /// Number must be `>= 0`
    #[display(fmt = "PositiveOrZero")]
    PositiveOrZero,
    /// Number must be `> 0`
    #[display(fmt = "Positive")]
    Positive,
}

/// One field failing one rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Violation {
    /// Field name as reported to callers (e.g. `cardNumber`)
    pub field: &'static str,
    /// Rule that failed
    pub constraint: Constraint,
    /// Human-readable message
    pub message: String,
}

impl Violation {
    /// Create a violation.
    pub fn new(field: &'static str, constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            field,
            constraint,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}
