//! The demo order session.

use std::rc::Rc;

use ledger::{
    KitchenDisplay, Ledger, LedgerStats, OrderHistory, PaymentStrategy, PlaceOrder, SalesReport,
    Settlement, Waiter,
};
use menu::{Bundle, BundleSummary, KitchenLog, MenuItem, Orderable, OrderableExt, Percent};
use serde::Serialize;

use crate::error::AppError;

const FAMILY_COMBO_DISCOUNT: f64 = 15.0;

/// Outcome of one session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub family_combo: BundleSummary,
    pub history: OrderHistory,
    pub stats: LedgerStats,
    pub settlement: Settlement,
    pub kitchen_tickets: usize,
    pub best_seller: Option<String>,
}

impl SessionReport {
    /// Renders the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for SessionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.family_combo)?;
        writeln!(f)?;
        writeln!(f, "{}", self.history)?;
        writeln!(f)?;
        writeln!(f, "{}", self.stats)?;
        writeln!(f, "Kitchen Tickets: {}", self.kitchen_tickets)?;
        if let Some(best_seller) = &self.best_seller {
            writeln!(f, "Best Seller: {best_seller}")?;
        }
        write!(f, "{}", self.settlement)
    }
}

/// Builds the family combo: two pizzas, a burger and a salad at 15% off.
pub fn family_combo() -> Result<Bundle, AppError> {
    let discount = Percent::new(FAMILY_COMBO_DISCOUNT)?;
    Ok(Bundle::with_discount("Family Combo", discount)?
        .with_item(MenuItem::pizza())
        .with_item(MenuItem::pizza())
        .with_item(MenuItem::burger())
        .with_item(MenuItem::salad()))
}

/// Runs one session against `ledger` and settles it with `payment`.
///
/// Two orders go through the waiter as one batch, then the family combo is
/// placed directly.
///
/// # Errors
///
/// Returns an [`AppError`] if a menu item cannot be built or an observer
/// rejects an order.
#[tracing::instrument(skip_all, fields(payment = payment.method()))]
pub fn run_session(
    ledger: &mut Ledger,
    payment: &dyn PaymentStrategy,
) -> Result<SessionReport, AppError> {
    let kitchen = Rc::new(KitchenDisplay::new());
    let sales = Rc::new(SalesReport::new());
    ledger.attach(kitchen.clone());
    ledger.attach(sales.clone());

    let mut waiter = Waiter::new();
    waiter.take_order(PlaceOrder::new(MenuItem::pizza()));
    waiter.take_order(PlaceOrder::new(
        MenuItem::burger().with_extra_cheese().with_bacon(),
    ));
    waiter.send_orders_to_kitchen(ledger)?;

    let combo = family_combo()?;
    let mut counter = KitchenLog::new();
    combo.serve(&mut counter);
    tracing::debug!(steps = counter.len(), "family combo served");
    let family_combo = combo.summary();
    ledger.place_order(combo.boxed())?;

    let settlement = ledger.process_payment(payment);
    tracing::info!(%settlement, "session settled");

    Ok(SessionReport {
        family_combo,
        history: ledger.order_history(),
        stats: ledger.stats(),
        settlement,
        kitchen_tickets: kitchen.ticket_count(),
        best_seller: sales.best_seller(),
    })
}
