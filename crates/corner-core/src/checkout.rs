//! # Checkout Module
//!
//! Totals math and receipt building.
//!
//! ## Totals Pipeline
//! ```text
//! subtotal ──► discount (5% iff subtotal > $5000.00, else $0)
//!          ──► tax (10% of subtotal - discount)
//!          ──► total (subtotal - discount + tax)
//!          ──► change (tendered - total, once tendered >= total)
//! ```
//!
//! All of it is pure: the payment retry loop and receipt printing live in
//! the terminal app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::CheckoutError;
use crate::money::Money;
use crate::{DISCOUNT_RATE, DISCOUNT_THRESHOLD, TAX_RATE};

// =============================================================================
// Totals
// =============================================================================

/// The discount/tax breakdown of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
}

impl Totals {
    /// Computes discount, tax, and grand total from a subtotal.
    ///
    /// The discount applies only when the subtotal strictly exceeds the
    /// threshold; tax is charged on the discounted amount.
    ///
    /// ```rust
    /// use corner_core::{checkout::Totals, Money};
    ///
    /// let totals = Totals::compute(Money::from_cents(600_000)); // $6000.00
    /// assert_eq!(totals.discount.cents(), 30_000); // $300.00
    /// assert_eq!(totals.tax.cents(), 57_000);      // $570.00
    /// assert_eq!(totals.total.cents(), 627_000);   // $6270.00
    /// ```
    pub fn compute(subtotal: Money) -> Self {
        let discount = if subtotal > DISCOUNT_THRESHOLD {
            subtotal.apply_rate(DISCOUNT_RATE)
        } else {
            Money::zero()
        };
        let taxable = subtotal - discount;
        let tax = taxable.apply_rate(TAX_RATE);

        Totals {
            subtotal,
            discount,
            tax,
            total: taxable + tax,
        }
    }

    /// Whether the bulk discount applied.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }

    /// Change due for a tendered amount, or an error when it falls short
    /// of the total (the session re-prompts on that error, without bound).
    pub fn change_for(&self, tendered: Money) -> Result<Money, CheckoutError> {
        if tendered < self.total {
            return Err(CheckoutError::InsufficientPayment { total: self.total });
        }
        Ok(tendered - self.total)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A line item on a printed receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

/// A finalized sale, snapshotted from the cart at payment time.
///
/// Every cart line becomes a receipt line; building the receipt reads the
/// cart but never touches stock. Committing stock is the catalog's job and
/// happens exactly once per checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub totals: Totals,
    pub paid: Money,
    pub change: Money,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(cart: &Cart, totals: Totals, paid: Money, change: Money) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|l| ReceiptLine {
                name: l.name.clone(),
                unit_price: l.unit_price,
                quantity: l.quantity,
                line_total: l.line_total(),
            })
            .collect();

        Receipt {
            lines,
            totals,
            paid,
            change,
            issued_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
