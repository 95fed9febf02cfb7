//! # Error Types
//!
//! Domain-specific error types for corner-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  corner-core errors (this file)                                 │
//! │  ├── CartError        - Reservation rule violations             │
//! │  ├── CheckoutError    - Payment shortfalls                      │
//! │  └── MoneyParseError  - Unparseable dollar amounts              │
//! │                                                                 │
//! │  The terminal session catches all of these at the menu boundary │
//! │  and converts them to user-facing messages; nothing propagates  │
//! │  past the current menu action.                                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (available stock, cart quantity)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Cart Error
// =============================================================================

/// Reservation rule violations raised by cart operations.
///
/// The `#[error]` texts match what the cart itself would say; the terminal
/// session deliberately collapses most of them into a generic message and
/// only logs the specific variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Requested quantity was zero or negative.
    #[error("Quantity must be positive")]
    QuantityNotPositive,

    /// A single add request exceeds the product's entire stock.
    #[error("Insufficient stock. Only {available} available")]
    InsufficientStock { available: i64 },

    /// The add request is fine on its own but, combined with what is
    /// already reserved in the cart, would exceed stock.
    #[error("Cannot add {requested}. Only {available} more available")]
    ReservationExceedsStock { requested: i64, available: i64 },

    /// Remove requested for a product with no cart entry.
    #[error("Product not in cart")]
    NotInCart,

    /// Remove requested for more units than are reserved.
    #[error("Cannot remove more than {in_cart} items")]
    RemoveExceedsReservation { in_cart: i64 },
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Payment failures during checkout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Tendered amount does not cover the total; the session re-prompts.
    #[error("Amount must be at least {total}")]
    InsufficientPayment { total: Money },
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Free-text input that could not be parsed as a dollar amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid dollar amount: {input:?}")]
pub struct MoneyParseError {
    pub input: String,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_messages() {
        assert_eq!(
            CartError::InsufficientStock { available: 3 }.to_string(),
            "Insufficient stock. Only 3 available"
        );
        assert_eq!(
            CartError::ReservationExceedsStock {
                requested: 5,
                available: 2
            }
            .to_string(),
            "Cannot add 5. Only 2 more available"
        );
        assert_eq!(
            CartError::RemoveExceedsReservation { in_cart: 4 }.to_string(),
            "Cannot remove more than 4 items"
        );
    }

    #[test]
    fn test_checkout_error_message() {
        let err = CheckoutError::InsufficientPayment {
            total: Money::from_cents(627_000),
        };
        assert_eq!(err.to_string(), "Amount must be at least $6270.00");
    }

    #[test]
    fn test_money_parse_error_message() {
        let err = MoneyParseError {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "not a valid dollar amount: \"abc\"");
    }
}
