//! # corner-core: Pure Business Logic for Corner POS
//!
//! This crate is the heart of Corner POS: the catalog/cart consistency
//! rules, totals math, and receipt building, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Corner POS Architecture                     │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 apps/terminal (corner-pos)                │  │
//! │  │   menu loop ──► prompts ──► table/receipt rendering       │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │              ★ corner-core (THIS CRATE) ★                 │  │
//! │  │                                                           │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐         │  │
//! │  │  │  money  │ │ catalog │ │  cart   │ │ checkout │         │  │
//! │  │  │  Money  │ │ Product │ │  Cart   │ │  Totals  │         │  │
//! │  │  │  Rate   │ │ Catalog │ │CartLine │ │ Receipt  │         │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘         │  │
//! │  │                                                           │  │
//! │  │  NO I/O • NO CONSOLE • PURE FUNCTIONS                     │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: All monetary values are in cents (i64), never floats
//! 2. **Explicit Errors**: Validation failures are typed enum variants; the
//!    caller decides the user-facing text
//! 3. **Reservation Model**: Cart quantities reserve stock without mutating
//!    it; stock is committed exactly once, at checkout

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Product, ProductId};
pub use checkout::{Receipt, ReceiptLine, Totals};
pub use error::{CartError, CartResult, CheckoutError, MoneyParseError};
pub use money::{Money, Rate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level below which a product is flagged as low stock.
///
/// Strictly less than: a product with exactly 5 units is not low.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Sales tax rate applied to the discounted subtotal (10%).
pub const TAX_RATE: Rate = Rate::from_bps(1000);

/// Bulk discount rate (5%), applied only above [`DISCOUNT_THRESHOLD`].
pub const DISCOUNT_RATE: Rate = Rate::from_bps(500);

/// Subtotal above which the bulk discount kicks in ($5000.00).
///
/// Strictly greater than: a subtotal of exactly $5000.00 earns no discount.
pub const DISCOUNT_THRESHOLD: Money = Money::from_cents(500_000);
