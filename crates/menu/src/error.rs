//! Menu error types.

use thiserror::Error;

/// Errors raised when a menu value is constructed from invalid input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    /// Price is negative, NaN or infinite.
    #[error("Invalid price: {price} (must be a finite, non-negative amount)")]
    InvalidPrice { price: f64 },

    /// Discount percentage outside of [0, 100).
    #[error("Invalid discount: {percent}% (must be at least 0 and below 100)")]
    InvalidDiscount { percent: f64 },

    /// Item or bundle name is blank.
    #[error("Name must not be empty")]
    EmptyName,

    /// Add-on label is blank.
    #[error("Add-on label must not be empty")]
    EmptyLabel,
}

/// Convenience type alias for menu results.
pub type Result<T> = std::result::Result<T, MenuError>;
