// cardcheck/src/constants.rs
//! Field names, patterns and messages shared by the validation rules

/// Card number: 13 to 16 ASCII digits
pub const CARD_NUMBER_PATTERN: &str = r"^[0-9]{13,16}$";

/// Account number: exactly 6 digits
pub const ACCOUNT_NUMBER_PATTERN: &str = r"^[0-9]{6}$";

/// Field names as reported in violations
pub const FIELD_CARD_NUMBER: &str = "cardNumber";
/// `cardType`
pub const FIELD_CARD_TYPE: &str = "cardType";
/// `accountNumber`
pub const FIELD_ACCOUNT_NUMBER: &str = "accountNumber";
/// `ownerId`
pub const FIELD_OWNER_ID: &str = "ownerId";
/// `dueAmount`
pub const FIELD_DUE_AMOUNT: &str = "dueAmount";
/// `creditLimit`
pub const FIELD_CREDIT_LIMIT: &str = "creditLimit";

/// Brand prefixes (leading digits of the card number)
pub const VISA_PREFIX: &str = "4";
/// Mastercard
pub const MASTER_PREFIX: &str = "5";
/// American Express
pub const AMERICAN_EXPRESS_PREFIX: &str = "37";
/// Discover
pub const DISCOVER_PREFIX: &str = "6";

/// Message carried by `Error::InvalidArgument` when the card type is
/// missing or unknown
pub const CARD_TYPE_REQUIRED_MESSAGE: &str = "Card type should be VISA, MASTER, AMEX or DISCOVER";
