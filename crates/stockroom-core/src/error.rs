//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Inventory operation failures                   │
//! │  └── ValidationError  - Field validation failures                      │
//! │                                                                         │
//! │  console errors (apps/console)                                         │
//! │  └── ConsoleError     - Input parsing, I/O, wrapped CoreError          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → printed message    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product ID, field name)
//! 3. Errors are enum variants, never String
//! 4. Every failure is an expected business condition, never a panic

use thiserror::Error;

use crate::product::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory operation errors.
///
/// All three variants are recoverable: the inventory is left exactly as it
/// was before the failed call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A product with this ID is already in the inventory.
    ///
    /// ## When This Occurs
    /// - `Inventory::add` with an ID that is already taken
    #[error("Product ID {0} already exists")]
    DuplicateId(ProductId),

    /// No product has this ID.
    ///
    /// ## When This Occurs
    /// - `remove`, `update_*` or `find_by_id` on an absent ID
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// A field value was rejected (negative number, blank name).
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] ValidationError),
}

/// Fieldless discriminant of [`CoreError`] for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateId,
    NotFound,
    InvalidValue,
}

impl CoreError {
    /// Returns the kind of this error without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::DuplicateId(_) => ErrorKind::DuplicateId,
            CoreError::NotFound(_) => ErrorKind::NotFound,
            CoreError::InvalidValue(_) => ErrorKind::InvalidValue,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// Produced by the rules in [`crate::validation`] and surfaced to callers as
/// [`CoreError::InvalidValue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    #[error("{field} cannot be empty")]
    Required { field: &'static str },

    /// A numeric field is below zero.
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    /// A floating-point field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

impl ValidationError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::Negative { field }
            | ValidationError::NotFinite { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
