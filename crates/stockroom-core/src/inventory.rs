//! # Inventory
//!
//! The owning collection of all products, enforcing ID uniqueness.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Console Action           Inventory Call              State Change      │
//! │  ──────────────           ──────────────              ────────────      │
//! │                                                                         │
//! │  Add product ────────────► add() ──────────────────► products.push()   │
//! │                                                                         │
//! │  Remove product ─────────► remove() ───────────────► products.remove() │
//! │                                                                         │
//! │  Update product ─────────► update_quantity() ──────► product mutated   │
//! │                            update_price()                              │
//! │                            update_name()                               │
//! │                                                                         │
//! │  Search ─────────────────► find_by_name_substring() (read only)        │
//! │                                                                         │
//! │  List / Statistics ──────► list_all(), count(),     (read only)        │
//! │                            total_value()                               │
//! │                                                                         │
//! │  NOTE: A failed call never changes the inventory.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are kept in a `Vec` in insertion order and looked up by a
//! linear scan over IDs.

use crate::error::{CoreError, CoreResult};
use crate::product::{Product, ProductId};

/// An ordered, unique-key collection of products.
///
/// ## Invariants
/// - No two products share an ID
/// - Iteration order is insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            products: Vec::new(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a new product at the end of the inventory.
    ///
    /// ## Errors
    /// - `DuplicateId` if a product with `id` already exists
    /// - `InvalidValue` if the name is blank or quantity/price is negative
    pub fn add(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> CoreResult<&Product> {
        if self.contains(id) {
            return Err(CoreError::DuplicateId(id));
        }

        let product = Product::new(id, name, quantity, price)?;
        self.products.push(product);

        let last = self.products.len() - 1;
        Ok(&self.products[last])
    }

    /// Removes the product with `id` and returns it.
    ///
    /// The relative order of the remaining products is preserved.
    pub fn remove(&mut self, id: ProductId) -> CoreResult<Product> {
        let index = self.position(id)?;
        Ok(self.products.remove(index))
    }

    /// Sets the quantity of the product with `id`.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> CoreResult<()> {
        self.get_mut(id)?.set_quantity(quantity)
    }

    /// Sets the unit price of the product with `id`.
    pub fn update_price(&mut self, id: ProductId, price: f64) -> CoreResult<()> {
        self.get_mut(id)?.set_price(price)
    }

    /// Renames the product with `id`.
    pub fn update_name(&mut self, id: ProductId, name: impl Into<String>) -> CoreResult<()> {
        self.get_mut(id)?.set_name(name)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns every product whose name contains `text`, ignoring case.
    ///
    /// Matches come back in insertion order. An empty `text` matches all
    /// products.
    pub fn find_by_name_substring(&self, text: &str) -> Vec<&Product> {
        let needle = text.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Looks up a single product by ID.
    pub fn find_by_id(&self, id: ProductId) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id() == id)
            .ok_or(CoreError::NotFound(id))
    }

    /// Returns true if a product with `id` exists.
    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id() == id)
    }

    /// All products in insertion order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Number of distinct products.
    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of quantity × price over all products; `0.0` when empty.
    ///
    /// Like [`Product::stock_value`], the sum may overflow to infinity for
    /// extreme quantities and prices.
    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::stock_value).sum()
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn position(&self, id: ProductId) -> CoreResult<usize> {
        self.products
            .iter()
            .position(|p| p.id() == id)
            .ok_or(CoreError::NotFound(id))
    }

    fn get_mut(&mut self, id: ProductId) -> CoreResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(CoreError::NotFound(id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
