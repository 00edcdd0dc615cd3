use app::{Config, run_session};
use ledger::{CardPayment, CashPayment, Ledger};
use menu::{Money, Orderable};

#[test]
fn test_session_paid_by_configured_card() {
    let config = Config::from_lookup(|key| match key {
        "CARD_NUMBER" => Some("1234-5678-9876-5432".to_string()),
        "CARD_HOLDER" => Some("Daniel Cojocaru".to_string()),
        _ => None,
    });
    let payment = config.payment_strategy().unwrap();
    let mut ledger = Ledger::new();

    let report = run_session(&mut ledger, payment.as_ref()).unwrap();

    assert_eq!(report.settlement.method, "card");
    assert_eq!(
        report.settlement.reference.as_deref(),
        Some("**** 5432, Daniel Cojocaru")
    );
    assert!(report.settlement.amount.approx_eq(ledger.total_revenue()));
}

#[test]
fn test_session_history_in_placement_order() {
    let mut ledger = Ledger::new();
    let card = CardPayment::new("4111 1111 1111 1111", "Ada").unwrap();

    let report = run_session(&mut ledger, &card).unwrap();

    let names: Vec<&str> = report.history.lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Pizza", "Burger + Extra Cheese + Bacon", "Family Combo"]
    );
    assert!(
        report
            .stats
            .average_order_value
            .approx_eq(ledger.total_revenue().divide(3))
    );
}

#[test]
fn test_family_combo_summary() {
    let mut ledger = Ledger::new();
    let report = run_session(&mut ledger, &CashPayment).unwrap();
    let combo = &report.family_combo;

    assert_eq!(combo.item_count, 4);
    assert!(combo.total.approx_eq(Money::new(39.066).unwrap()));
    assert!(combo.savings.approx_eq(Money::new(45.96 - 39.066).unwrap()));
    assert_eq!(ledger.history()[2].item().name(), "Family Combo");
}

#[test]
fn test_sessions_accumulate_on_shared_ledger() {
    let mut ledger = Ledger::new();
    run_session(&mut ledger, &CashPayment).unwrap();
    let second = run_session(&mut ledger, &CashPayment).unwrap();

    assert_eq!(second.stats.total_orders, 6);
    assert_eq!(ledger.observer_count(), 4);
    // Each session's kitchen display only sees its own orders.
    assert_eq!(second.kitchen_tickets, 3);
}
