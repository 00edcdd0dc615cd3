//! Placed orders and the read views built from them.

use chrono::{DateTime, Utc};
use common::OrderId;
use menu::{ItemSummary, Money, Orderable};
use serde::Serialize;

/// An order recorded in the ledger.
///
/// The name and price are frozen when the order is placed; the item itself
/// is kept so it can still be described, prepared and served.
#[derive(Debug)]
pub struct PlacedOrder {
    id: OrderId,
    sequence: u64,
    name: String,
    price: Money,
    placed_at: DateTime<Utc>,
    item: Box<dyn Orderable>,
}

impl PlacedOrder {
    /// Snapshots `item` as the `sequence`-th order.
    pub(crate) fn new(sequence: u64, item: Box<dyn Orderable>, price: Money) -> Self {
        Self {
            id: OrderId::new(),
            sequence,
            name: item.name(),
            price,
            placed_at: Utc::now(),
            item,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// 1-based position in the ledger.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Name at placement time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price at placement time.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Returns the placed item.
    pub fn item(&self) -> &dyn Orderable {
        self.item.as_ref()
    }

    /// Describes the placed item as it is now.
    pub fn summary(&self) -> ItemSummary {
        self.item.describe()
    }
}

/// One row of the order history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryLine {
    pub sequence: u64,
    pub order_id: OrderId,
    pub name: String,
    pub price: Money,
    pub placed_at: DateTime<Utc>,
}

impl From<&PlacedOrder> for HistoryLine {
    fn from(order: &PlacedOrder) -> Self {
        Self {
            sequence: order.sequence,
            order_id: order.id,
            name: order.name.clone(),
            price: order.price,
            placed_at: order.placed_at,
        }
    }
}

/// Snapshot of every placed order, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderHistory {
    pub lines: Vec<HistoryLine>,
}

impl OrderHistory {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for OrderHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ORDER HISTORY")?;
        if self.lines.is_empty() {
            return write!(f, "No orders yet!");
        }
        let mut lines = self.lines.iter().peekable();
        while let Some(line) = lines.next() {
            write!(f, "{}. {} - {}", line.sequence, line.name, line.price)?;
            if lines.peek().is_some() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Running totals of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedgerStats {
    pub total_orders: usize,
    pub total_revenue: Money,
    pub average_order_value: Money,
}

impl std::fmt::Display for LedgerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Orders: {}", self.total_orders)?;
        writeln!(f, "Total Revenue: {}", self.total_revenue)?;
        write!(f, "Average Order: {}", self.average_order_value)
    }
}
