//! Deferred order placement.

use std::collections::VecDeque;

use common::OrderId;
use menu::Orderable;

use crate::error::Result;
use crate::ledger::Ledger;

/// A deferred request against the ledger.
///
/// Commands are immutable once created and are consumed when executed.
pub trait OrderCommand: std::fmt::Debug {
    /// Returns a short description for logs.
    fn describe(&self) -> String;

    /// Executes the command against `ledger`.
    fn execute(self: Box<Self>, ledger: &mut Ledger) -> Result<OrderId>;
}

/// Places exactly one item in the ledger.
#[derive(Debug)]
pub struct PlaceOrder {
    item: Box<dyn Orderable>,
}

impl PlaceOrder {
    pub fn new(item: impl Orderable + 'static) -> Self {
        Self {
            item: Box::new(item),
        }
    }

    /// Returns the item that will be placed.
    pub fn item(&self) -> &dyn Orderable {
        self.item.as_ref()
    }
}

impl OrderCommand for PlaceOrder {
    fn describe(&self) -> String {
        format!("place {}", self.item.name())
    }

    fn execute(self: Box<Self>, ledger: &mut Ledger) -> Result<OrderId> {
        ledger.place_order(self.item)
    }
}

/// FIFO buffer of commands, flushed to the ledger as one batch.
#[derive(Debug, Default)]
pub struct Waiter {
    order_pad: VecDeque<Box<dyn OrderCommand>>,
}

impl Waiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes down a command without executing it.
    pub fn take_order(&mut self, command: impl OrderCommand + 'static) {
        tracing::debug!(command = %command.describe(), "waiter notes down the order");
        self.order_pad.push_back(Box::new(command));
    }

    /// Number of commands waiting to be sent.
    pub fn pending(&self) -> usize {
        self.order_pad.len()
    }

    /// Executes every buffered command in the order taken and empties the
    /// buffer. Flushing an empty buffer places nothing.
    ///
    /// Returns the ids of the placed orders.
    ///
    /// # Errors
    ///
    /// If a command fails, commands executed before it (including the failing
    /// one, whose order is already recorded) stay placed. Commands not yet
    /// executed go back on the pad in their original order and the error is
    /// returned.
    #[tracing::instrument(skip_all, fields(batch = self.order_pad.len()))]
    pub fn send_orders_to_kitchen(&mut self, ledger: &mut Ledger) -> Result<Vec<OrderId>> {
        let mut batch = std::mem::take(&mut self.order_pad);
        let mut placed = Vec::with_capacity(batch.len());

        while let Some(command) = batch.pop_front() {
            match command.execute(ledger) {
                Ok(order_id) => placed.push(order_id),
                Err(e) => {
                    tracing::warn!(
                        placed = placed.len(),
                        requeued = batch.len(),
                        error = %e,
                        "batch interrupted"
                    );
                    self.order_pad = batch;
                    return Err(e);
                }
            }
        }

        if !placed.is_empty() {
            tracing::info!(count = placed.len(), "orders sent to kitchen");
        }
        Ok(placed)
    }
}
