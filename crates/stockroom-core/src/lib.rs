//! # stockroom-core: Pure Inventory Logic for Stockroom
//!
//! This crate holds the product record and the inventory collection that
//! owns it. Every operation is a plain synchronous call that returns a typed
//! result; nothing in here prints, reads input, or touches the file system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Menu ──► Prompts ──► Parse input ──► Format results         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │ inventory │  │validation │  │   error   │  │   │
//! │  │   │ ProductId │  │ Inventory │  │   rules   │  │ CoreError │  │   │
//! │  │   │  Product  │  │  queries  │  │  checks   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PRINTING • NO PERSISTENCE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - `ProductId` and the `Product` record
//! - [`inventory`] - the `Inventory` collection service
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, ProductId};
//!
//! let mut inventory = Inventory::new();
//! inventory.add(ProductId::new(1), "Steel Bolt", 3, 10.0).unwrap();
//! inventory.add(ProductId::new(2), "Hammer", 2, 5.5).unwrap();
//!
//! assert_eq!(inventory.count(), 2);
//! assert_eq!(inventory.total_value(), 41.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Inventory` instead of
// `use stockroom_core::inventory::Inventory`

pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use inventory::Inventory;
pub use product::{Product, ProductId};
