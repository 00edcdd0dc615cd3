//! Application error types.

use ledger::{LedgerError, PaymentError};
use menu::MenuError;
use thiserror::Error;

/// Errors that can end an order session.
#[derive(Debug, Error)]
pub enum AppError {
    /// A menu item could not be built.
    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    /// The ledger rejected an order.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// The configured payment method is invalid.
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    /// The report could not be rendered.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
