//! Order ledger for the restaurant order pipeline.
//!
//! This crate records placed orders and everything that reacts to them:
//! - [`Ledger`] append-only order log with running totals
//! - [`OrderObserver`] listeners notified synchronously on each placement
//! - [`Waiter`] command queue flushing deferred [`OrderCommand`]s as a batch
//! - [`PaymentStrategy`] settlement algorithms for the accumulated revenue

pub mod command;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod payment;
pub mod record;

pub use command::{OrderCommand, PlaceOrder, Waiter};
pub use common::OrderId;
pub use error::{LedgerError, ObserverError, PaymentError, Result};
pub use ledger::Ledger;
pub use observer::{KitchenDisplay, KitchenTicket, OrderObserver, SalesLine, SalesReport};
pub use payment::{CardPayment, CashPayment, PaymentStrategy, Settlement};
pub use record::{HistoryLine, LedgerStats, OrderHistory, PlacedOrder};
