//! Composition root for the restaurant order pipeline.
//!
//! Wires leaf items into decorators and bundles, places them directly or
//! through the waiter, and settles the ledger with the configured payment
//! strategy.

pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

pub use config::{CardDetails, Config, LogFormat, ReportFormat};
pub use error::AppError;
pub use session::{SessionReport, run_session};
