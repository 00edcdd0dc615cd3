//! Ledger error types.

use thiserror::Error;

/// Failure reported by an order observer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ObserverError {
    pub reason: String,
}

impl ObserverError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while recording orders.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// An observer failed. The order was already recorded; observers
    /// after the failing one were not notified.
    #[error("Observer '{observer}' failed for order #{sequence}: {source}")]
    Observer {
        observer: String,
        sequence: u64,
        source: ObserverError,
    },
}

/// Errors raised when constructing a payment strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Card holder name is blank.
    #[error("Card holder is required")]
    EmptyCardHolder,

    /// Card number does not have a plausible digit count.
    #[error("Invalid card number: {digits} digits (expected 12 to 19)")]
    InvalidCardNumber { digits: usize },

    /// Card number contains something other than digits, spaces or dashes.
    #[error("Invalid card number: unexpected character '{found}'")]
    InvalidCardCharacter { found: char },
}

/// Convenience type alias for ledger results.
pub type Result<T> = std::result::Result<T, LedgerError>;
