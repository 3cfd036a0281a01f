// ⚠️ Parse errors for inventory and recipe rows
// Row-level failures are recoverable: the row is dropped and logged, the batch continues

use thiserror::Error;

/// Why a raw `(name, quantity, kind, expiry)` row could not become an entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("name is empty")]
    EmptyName,

    #[error("unknown measurement kind '{0}' (expected one of: of, grams, ml, slices)")]
    UnknownKind(String),

    #[error("quantity '{0}' is not an integer")]
    InvalidQuantity(String),

    #[error("quantity {0} must be greater than zero")]
    NonPositiveQuantity(i64),

    #[error("expiry '{0}' is not in DD/MM/YYYY form")]
    MalformedDate(String),

    #[error("expiry {day:02}/{month:02}/{year} is not a calendar date")]
    InvalidDate { day: u32, month: u32, year: i32 },
}
