//! Listeners notified whenever an order is placed.

use std::cell::RefCell;
use std::collections::BTreeMap;

use common::OrderId;
use menu::{KitchenLog, Money};
use serde::Serialize;

use crate::error::ObserverError;
use crate::record::PlacedOrder;

/// A listener invoked synchronously by the ledger after each placement.
///
/// The ledger holds shared handles to its observers and never controls
/// their lifetime. Observers are called in attach order; returning an
/// error stops the notification of later observers for that order.
pub trait OrderObserver {
    /// Returns the name of this observer.
    fn name(&self) -> &str;

    /// Handles a newly placed order.
    fn update(&self, order: &PlacedOrder) -> Result<(), ObserverError>;
}

/// A ticket shown on the kitchen display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KitchenTicket {
    pub order_id: OrderId,
    pub sequence: u64,
    pub name: String,
}

/// Kitchen screen that opens a ticket and starts preparation for every
/// placed order.
#[derive(Debug, Default)]
pub struct KitchenDisplay {
    tickets: RefCell<Vec<KitchenTicket>>,
    log: RefCell<KitchenLog>,
}

impl KitchenDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every ticket received so far.
    pub fn tickets(&self) -> Vec<KitchenTicket> {
        self.tickets.borrow().clone()
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.borrow().len()
    }

    /// Returns the preparation steps started by this display.
    pub fn kitchen_log(&self) -> KitchenLog {
        self.log.borrow().clone()
    }
}

impl OrderObserver for KitchenDisplay {
    fn name(&self) -> &str {
        "kitchen-display"
    }

    fn update(&self, order: &PlacedOrder) -> Result<(), ObserverError> {
        tracing::info!(
            order_id = %order.id(),
            sequence = order.sequence(),
            name = order.name(),
            "kitchen alert: new order received"
        );
        self.tickets.borrow_mut().push(KitchenTicket {
            order_id: order.id(),
            sequence: order.sequence(),
            name: order.name().to_string(),
        });
        order.item().prepare(&mut self.log.borrow_mut());
        Ok(())
    }
}

/// Sales tallied per item name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SalesLine {
    pub count: u64,
    pub revenue: Money,
}

/// Accounting view of placed orders, grouped by item name.
#[derive(Debug, Default)]
pub struct SalesReport {
    lines: RefCell<BTreeMap<String, SalesLine>>,
}

impl SalesReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tally for one item name.
    pub fn line(&self, name: &str) -> Option<SalesLine> {
        self.lines.borrow().get(name).copied()
    }

    /// Returns all tallies ordered by item name.
    pub fn lines(&self) -> Vec<(String, SalesLine)> {
        self.lines
            .borrow()
            .iter()
            .map(|(name, line)| (name.clone(), *line))
            .collect()
    }

    /// Returns the item sold most often; ties go to the higher revenue.
    pub fn best_seller(&self) -> Option<String> {
        self.lines
            .borrow()
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.count.cmp(&b.count).then(
                    a.revenue
                        .partial_cmp(&b.revenue)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
            })
            .map(|(name, _)| name.clone())
    }

    /// Sum of every tallied order.
    pub fn total(&self) -> Money {
        self.lines.borrow().values().map(|l| l.revenue).sum()
    }
}

impl OrderObserver for SalesReport {
    fn name(&self) -> &str {
        "sales-report"
    }

    fn update(&self, order: &PlacedOrder) -> Result<(), ObserverError> {
        let mut lines = self.lines.borrow_mut();
        let line = lines.entry(order.name().to_string()).or_default();
        line.count += 1;
        line.revenue += order.price();
        Ok(())
    }
}
