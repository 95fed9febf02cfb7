//! # Cart Module
//!
//! The shopping cart: an ordered mapping from product id to a reserved
//! quantity. Reservations are validated against catalog stock on every add
//! and remove, but never mutate stock; the commit happens once, at checkout.
//!
//! ## Invariants
//! - Every line quantity is positive.
//! - Every line quantity is at most the product's current stock (a
//!   reservation, not yet committed).
//! - A quantity reaching exactly 0 removes the line.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductId};
use crate::error::{CartError, CartResult};
use crate::money::Money;

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart.
///
/// ## Snapshot Pattern
/// Name and unit price are frozen at the time of adding, so cart display
/// and the eventual receipt stay consistent regardless of anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Which catalog product this line reserves.
    pub product_id: ProductId,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Reserved quantity, always positive.
    pub quantity: i64,
}

impl CartLine {
    fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Line total: unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart. Created empty at session start, replaced with a new
/// empty cart after a successful checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Reserves `quantity` more units of `product`.
    ///
    /// ## Validation Order
    /// 1. Quantity must be positive.
    /// 2. The request alone must not exceed stock.
    /// 3. The request plus what is already reserved must not exceed stock;
    ///    the error reports how many more units are still available.
    ///
    /// ## Behavior
    /// Cumulative: adding 2 then 3 of the same product leaves a single
    /// line with quantity 5.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CartResult<()> {
        if quantity <= 0 {
            return Err(CartError::QuantityNotPositive);
        }

        if product.stock < quantity {
            return Err(CartError::InsufficientStock {
                available: product.stock,
            });
        }

        let in_cart = self.quantity_of(product.id);
        if product.stock < in_cart + quantity {
            return Err(CartError::ReservationExceedsStock {
                requested: quantity,
                available: product.stock - in_cart,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine::from_product(product, quantity));
        }
        Ok(())
    }

    /// Releases `quantity` units of a reservation.
    ///
    /// Removing exactly the reserved amount deletes the line entirely.
    /// Quantity must be positive; a negative removal would inflate the
    /// reservation past stock.
    pub fn remove_item(&mut self, product_id: ProductId, quantity: i64) -> CartResult<()> {
        if quantity <= 0 {
            return Err(CartError::QuantityNotPositive);
        }

        let Some(position) = self.lines.iter().position(|l| l.product_id == product_id) else {
            return Err(CartError::NotInCart);
        };

        let line = &mut self.lines[position];
        if quantity > line.quantity {
            return Err(CartError::RemoveExceedsReservation {
                in_cart: line.quantity,
            });
        }

        line.quantity -= quantity;
        if line.quantity == 0 {
            self.lines.remove(position);
        }
        Ok(())
    }

    /// Quantity currently reserved for a product, 0 if absent.
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Finds a line by exact, case-sensitive product name.
    ///
    /// Used by the remove-from-cart flow, where the user types the name as
    /// shown in the cart listing.
    pub fn find_by_name(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.name == name)
    }

    /// The cart lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line totals before discount and tax. Pure, no side effects;
    /// zero for an empty cart.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, price_cents: i64, stock: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            Money::from_cents(price_cents),
            stock,
        )
    }

    #[test]
    fn test_add_is_cumulative() {
        let mut cart = Cart::new();
        let product = test_product(1, 20_000, 10);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(product.id), 5);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 20_000, 10);

        assert_eq!(
            cart.add_item(&product, 0),
            Err(CartError::QuantityNotPositive)
        );
        assert_eq!(
            cart.add_item(&product, -3),
            Err(CartError::QuantityNotPositive)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_more_than_stock() {
        let mut cart = Cart::new();
        let product = test_product(1, 20_000, 3);

        assert_eq!(
            cart.add_item(&product, 5),
            Err(CartError::InsufficientStock { available: 3 })
        );
    }

    #[test]
    fn test_add_rejects_reservation_beyond_stock() {
        let mut cart = Cart::new();
        let product = test_product(1, 20_000, 10);

        cart.add_item(&product, 8).unwrap();
        // 8 reserved, only 2 more available
        assert_eq!(
            cart.add_item(&product, 5),
            Err(CartError::ReservationExceedsStock {
                requested: 5,
                available: 2
            })
        );
        // The failed add must not change the reservation
        assert_eq!(cart.quantity_of(product.id), 8);

        // Reserving exactly the remainder is fine
        cart.add_item(&product, 2).unwrap();
        assert_eq!(cart.quantity_of(product.id), 10);
    }

    #[test]
    fn test_remove_requires_presence() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.remove_item(ProductId::new(1), 1),
            Err(CartError::NotInCart)
        );
    }

    #[test]
    fn test_remove_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 20_000, 10);

        // Reserve the entire stock, then try to remove a negative amount.
        // Accepting it would inflate the reservation past stock and break
        // the commit-time guarantee.
        cart.add_item(&product, 10).unwrap();
        assert_eq!(
            cart.remove_item(product.id, -5),
            Err(CartError::QuantityNotPositive)
        );
        assert_eq!(
            cart.remove_item(product.id, 0),
            Err(CartError::QuantityNotPositive)
        );
        assert_eq!(cart.quantity_of(product.id), 10);
    }

    #[test]
    fn test_remove_rejects_more_than_reserved() {
        let mut cart = Cart::new();
        let product = test_product(1, 20_000, 10);

        cart.add_item(&product, 4).unwrap();
        assert_eq!(
            cart.remove_item(product.id, 5),
            Err(CartError::RemoveExceedsReservation { in_cart: 4 })
        );
        assert_eq!(cart.quantity_of(product.id), 4);
    }

    #[test]
    fn test_remove_exact_amount_deletes_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 20_000, 10);

        cart.add_item(&product, 4).unwrap();
        cart.remove_item(product.id, 1).unwrap();
        assert_eq!(cart.quantity_of(product.id), 3);

        cart.remove_item(product.id, 3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        assert_eq!(cart.subtotal(), Money::zero());

        let a = test_product(1, 20_000, 10); // $200.00
        let b = test_product(2, 50_000, 15); // $500.00

        cart.add_item(&a, 2).unwrap();
        cart.add_item(&b, 1).unwrap();

        // 2 × $200 + 1 × $500 = $900.00
        assert_eq!(cart.subtotal(), Money::from_cents(90_000));
    }

    #[test]
    fn test_find_by_name_is_case_sensitive() {
        let mut cart = Cart::new();
        let product = test_product(1, 20_000, 10);

        cart.add_item(&product, 1).unwrap();
        assert!(cart.find_by_name("Product 1").is_some());
        assert!(cart.find_by_name("product 1").is_none());
        assert!(cart.find_by_name("Product 2").is_none());
    }

    #[test]
    fn test_snapshot_keeps_price_at_add_time() {
        let mut cart = Cart::new();
        let mut product = test_product(1, 20_000, 10);

        cart.add_item(&product, 1).unwrap();
        product.price = Money::from_cents(99_900);

        assert_eq!(cart.lines()[0].unit_price, Money::from_cents(20_000));
    }
}
