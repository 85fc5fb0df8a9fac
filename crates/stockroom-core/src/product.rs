//! # Product Record
//!
//! A single inventory line item.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────┐
//! │        Product          │
//! │  ─────────────────────  │
//! │  id        (immutable)  │
//! │  name      (not blank)  │
//! │  quantity  (>= 0)       │
//! │  price     (>= 0)       │
//! └─────────────────────────┘
//! ```
//!
//! Fields are private so the invariants above can only be broken through
//! the validating constructor and setters, which refuse to.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::validation::{validate_price, validate_product_name, validate_quantity};

// =============================================================================
// Product ID
// =============================================================================

/// Externally assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product held in an [`Inventory`](crate::Inventory).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: i64,
    price: f64,
}

impl Product {
    /// Creates a fully-formed product, validating every field.
    ///
    /// ## Errors
    /// `CoreError::InvalidValue` when the name is blank, or the quantity or
    /// price is negative (or the price is not finite).
    pub fn new(id: ProductId, name: impl Into<String>, quantity: i64, price: f64) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_quantity(quantity)?;
        validate_price(price)?;

        Ok(Product {
            id,
            name,
            quantity,
            price,
        })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Value of the stock on hand (quantity × price).
    ///
    /// Not guaranteed finite: a huge quantity times a huge price overflows
    /// to `f64::INFINITY`. It is never NaN since both factors are finite
    /// and non-negative.
    #[inline]
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Renames the product. Blank names are rejected and the old name kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        validate_product_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Sets the quantity on hand. Negative values are rejected.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Sets the unit price. Negative or non-finite values are rejected.
    pub fn set_price(&mut self, price: f64) -> CoreResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
