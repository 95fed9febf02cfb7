//! # Catalog Module
//!
//! The product catalog: a fixed, ordered list of products seeded once at
//! startup. Nothing is ever added or removed at runtime; the only mutation
//! is the stock decrement when a checkout commits the cart's reservations.
//!
//! ## Identity
//! Products are keyed by a stable [`ProductId`] assigned at seed time, not
//! by name or by memory identity. Two products with the same name would
//! still be distinct entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cart::Cart;
use crate::money::Money;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Product Id
// =============================================================================

/// Stable identifier for a catalog product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Invariant: `stock >= 0`. The cart's reservation checks guarantee that
/// [`Product::commit_stock`] is never asked to take more than is there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier assigned at seed time.
    pub id: ProductId,

    /// Display name shown in the catalog, cart, and on the receipt.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Current stock level.
    pub stock: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, stock: i64) -> Self {
        Product {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Permanently decrements stock by `quantity`.
    ///
    /// ## Caller Contract
    /// `quantity` must not exceed current stock. The cart enforces this
    /// before checkout ever commits, so stock can never go negative under
    /// valid call sequences.
    pub fn commit_stock(&mut self, quantity: i64) {
        debug_assert!(
            quantity <= self.stock,
            "commit_stock called with quantity {} > stock {}",
            quantity,
            self.stock
        );
        self.stock -= quantity;
    }

    /// Stock strictly below the low-stock threshold of 5 units.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

/// Renders as `"{name} (${price}, Stock: {stock})"`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, Stock: {})", self.name, self.price, self.stock)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A fixed ordered sequence of products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The store's startup inventory.
    pub fn seed() -> Self {
        let items: [(&str, i64, i64); 10] = [
            ("Gain Laundry Detergent", 200, 10),
            ("Paper Towels Bundle", 500, 15),
            ("Tissues - Pack of 24", 150, 20),
            ("Trash Bags", 100, 10),
            ("Zip Bags", 50, 25),
            ("Special K Cereal Chocolate", 300, 16),
            ("Exotic Spices Bundle", 400, 3),
            ("Moscato Wine", 250, 5),
            ("Fresh Produce Combo", 120, 12),
            ("Exotic Breakfast Combo", 290, 4),
        ];

        let products = items
            .iter()
            .enumerate()
            .map(|(i, &(name, dollars, stock))| {
                Product::new(
                    ProductId::new(i as u32 + 1),
                    name,
                    Money::from_major_minor(dollars, 0),
                    stock,
                )
            })
            .collect();

        Catalog::new(products)
    }

    /// Looks up a product by its stable id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Looks up a product by 1-based menu position.
    ///
    /// Returns `None` for 0 and for anything past the end, which the
    /// session reports as an invalid selection.
    pub fn by_index(&self, index: usize) -> Option<&Product> {
        index.checked_sub(1).and_then(|i| self.products.get(i))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Products currently under the low-stock threshold, in catalog order.
    pub fn low_stock(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_low_stock())
    }

    /// Commits the cart's reservations: each reserved quantity is taken out
    /// of permanent stock exactly once.
    ///
    /// The cart invariant (reserved quantity never exceeds stock) makes
    /// this infallible.
    pub fn commit(&mut self, cart: &Cart) {
        for line in cart.lines() {
            if let Some(product) = self.get_mut(line.product_id) {
                product.commit_stock(line.quantity);
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_inventory() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 10);

        let first = catalog.by_index(1).unwrap();
        assert_eq!(first.name, "Gain Laundry Detergent");
        assert_eq!(first.price, Money::from_cents(20_000));
        assert_eq!(first.stock, 10);
    }

    #[test]
    fn test_product_display() {
        let product = Product::new(
            ProductId::new(1),
            "Trash Bags",
            Money::from_cents(10_000),
            10,
        );
        assert_eq!(product.to_string(), "Trash Bags ($100.00, Stock: 10)");
    }

    #[test]
    fn test_by_index_bounds() {
        let catalog = Catalog::seed();
        assert!(catalog.by_index(0).is_none());
        assert!(catalog.by_index(1).is_some());
        assert!(catalog.by_index(10).is_some());
        assert!(catalog.by_index(11).is_none());
    }

    #[test]
    fn test_commit_stock_decrements_exactly() {
        let mut product = Product::new(
            ProductId::new(1),
            "Trash Bags",
            Money::from_cents(10_000),
            10,
        );
        product.commit_stock(3);
        assert_eq!(product.stock, 7);
        product.commit_stock(7);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_low_stock_threshold_is_strict() {
        let seed = Catalog::seed();
        // Exotic Spices Bundle (3) and Exotic Breakfast Combo (4) are low;
        // Moscato Wine sits exactly at 5 and is not.
        let low: Vec<&str> = seed.low_stock().map(|p| p.name.as_str()).collect();
        assert_eq!(low, vec!["Exotic Spices Bundle", "Exotic Breakfast Combo"]);
    }

    #[test]
    fn test_commit_cart_decrements_once_per_line() {
        let mut catalog = Catalog::seed();
        let mut cart = Cart::new();

        cart.add_item(catalog.by_index(1).unwrap(), 2).unwrap();
        cart.add_item(catalog.by_index(2).unwrap(), 1).unwrap();

        catalog.commit(&cart);

        assert_eq!(catalog.by_index(1).unwrap().stock, 8);
        assert_eq!(catalog.by_index(2).unwrap().stock, 14);
    }
}
