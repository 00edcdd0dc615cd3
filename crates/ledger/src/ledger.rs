//! The order ledger.

use std::rc::Rc;

use common::OrderId;
use menu::{Money, Orderable};

use crate::error::{LedgerError, Result};
use crate::observer::OrderObserver;
use crate::payment::{PaymentStrategy, Settlement};
use crate::record::{HistoryLine, LedgerStats, OrderHistory, PlacedOrder};

/// Append-only record of placed orders with running totals.
///
/// One ledger is created at the composition root and passed to everything
/// that places orders. The only transition is an append by
/// [`place_order`](Ledger::place_order); every other operation is a read.
///
/// Invariants:
/// - `total_orders()` equals the number of recorded orders
/// - `total_revenue()` equals the sum of prices taken at placement time
#[derive(Default)]
pub struct Ledger {
    orders: Vec<PlacedOrder>,
    revenue: Money,
    observers: Vec<Rc<dyn OrderObserver>>,
}

impl Ledger {
    /// Creates an empty ledger with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes an observer. Observers are not de-duplicated and cannot be
    /// detached.
    pub fn attach(&mut self, observer: Rc<dyn OrderObserver>) {
        tracing::debug!(observer = observer.name(), "observer attached");
        self.observers.push(observer);
    }

    /// Records an order and notifies every observer in attach order.
    ///
    /// The item's price is evaluated exactly once, here, and frozen into the
    /// ledger's revenue.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Observer`] if an observer fails. The order stays
    /// recorded and observers after the failing one are not notified.
    #[tracing::instrument(skip(self, item))]
    pub fn place_order(&mut self, item: Box<dyn Orderable>) -> Result<OrderId> {
        let price = item.price();
        let sequence = self.orders.len() as u64 + 1;
        let order = PlacedOrder::new(sequence, item, price);
        let order_id = order.id();

        tracing::info!(
            %order_id,
            sequence,
            name = order.name(),
            %price,
            "order placed"
        );

        self.revenue += price;
        self.orders.push(order);

        metrics::counter!("restaurant_orders_placed_total").increment(1);
        metrics::histogram!("restaurant_order_value_dollars").record(price.amount());
        metrics::gauge!("restaurant_revenue_dollars").set(self.revenue.amount());

        let index = self.orders.len() - 1;
        self.notify_observers(&self.orders[index])?;

        Ok(order_id)
    }

    fn notify_observers(&self, order: &PlacedOrder) -> Result<()> {
        for observer in &self.observers {
            if let Err(source) = observer.update(order) {
                metrics::counter!("restaurant_observer_failures_total").increment(1);
                tracing::warn!(
                    observer = observer.name(),
                    sequence = order.sequence(),
                    error = %source,
                    "observer failed, remaining observers skipped"
                );
                return Err(LedgerError::Observer {
                    observer: observer.name().to_string(),
                    sequence: order.sequence(),
                    source,
                });
            }
        }
        Ok(())
    }

    /// Settles the current revenue with `strategy`.
    ///
    /// Revenue is not reset, so repeated calls settle the same total again.
    #[tracing::instrument(skip(self, strategy), fields(method = strategy.method()))]
    pub fn process_payment(&self, strategy: &dyn PaymentStrategy) -> Settlement {
        let settlement = strategy.pay(self.revenue);
        metrics::counter!(
            "restaurant_payments_processed_total",
            "method" => strategy.method()
        )
        .increment(1);
        settlement
    }

    /// Returns every placed order in placement order.
    pub fn history(&self) -> &[PlacedOrder] {
        &self.orders
    }

    /// Looks up a placed order.
    pub fn get(&self, order_id: OrderId) -> Option<&PlacedOrder> {
        self.orders.iter().find(|o| o.id() == order_id)
    }

    /// Returns a printable snapshot of the order history.
    pub fn order_history(&self) -> OrderHistory {
        OrderHistory {
            lines: self.orders.iter().map(HistoryLine::from).collect(),
        }
    }

    pub fn total_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn total_revenue(&self) -> Money {
        self.revenue
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Returns the running totals.
    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            total_orders: self.total_orders(),
            total_revenue: self.revenue,
            average_order_value: self.revenue.divide(self.total_orders()),
        }
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("orders", &self.orders.len())
            .field("revenue", &self.revenue)
            .field(
                "observers",
                &self.observers.iter().map(|o| o.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
