//! Integration tests for the ledger pipeline.
//!
//! These tests wire items, observers, the waiter and payment strategies
//! together the way the composition root does.

use std::cell::RefCell;
use std::rc::Rc;

use ledger::{
    CardPayment, CashPayment, KitchenDisplay, Ledger, ObserverError, OrderObserver, PlaceOrder,
    PlacedOrder, SalesReport, Waiter,
};
use menu::{Bundle, MenuItem, Money, Orderable, OrderableExt, Percent};

fn money(d: f64) -> Money {
    Money::new(d).unwrap()
}

/// Captures the id and name of every order it is shown.
#[derive(Default)]
struct Capture {
    seen: RefCell<Vec<(ledger::OrderId, String)>>,
}

impl OrderObserver for Capture {
    fn name(&self) -> &str {
        "capture"
    }

    fn update(&self, order: &PlacedOrder) -> Result<(), ObserverError> {
        self.seen
            .borrow_mut()
            .push((order.id(), order.item().name()));
        Ok(())
    }
}

fn family_combo() -> Bundle {
    Bundle::with_discount("Family Combo", Percent::new(15.0).unwrap())
        .unwrap()
        .with_item(MenuItem::pizza())
        .with_item(MenuItem::burger())
        .with_item(MenuItem::salad())
}

mod ledger_invariants {
    use super::*;

    #[test]
    fn count_and_revenue_track_every_placement() {
        let mut ledger = Ledger::new();
        let items: Vec<Box<dyn Orderable>> = vec![
            MenuItem::pizza().boxed(),
            MenuItem::burger().with_extra_cheese().with_bacon().boxed(),
            family_combo().boxed(),
            MenuItem::pasta().discounted(Percent::new(20.0).unwrap()).boxed(),
        ];
        let expected: Money = items.iter().map(|i| i.price()).sum();

        for item in items {
            ledger.place_order(item).unwrap();
        }

        assert_eq!(ledger.total_orders(), 4);
        assert_eq!(ledger.history().len(), ledger.total_orders());
        assert!(ledger.total_revenue().approx_eq(expected));
        let summed: Money = ledger.history().iter().map(|o| o.price()).sum();
        assert!(summed.approx_eq(ledger.total_revenue()));
    }

    #[test]
    fn later_mutation_does_not_change_recorded_revenue() {
        let burger = Rc::new(RefCell::new(MenuItem::burger()));
        let combo = Bundle::new("Lunch")
            .unwrap()
            .with_item(Rc::clone(&burger))
            .with_item(MenuItem::salad());

        let mut ledger = Ledger::new();
        ledger.place_order(combo.boxed()).unwrap();
        burger.borrow_mut().set_price(money(1.0));

        assert!(ledger.total_revenue().approx_eq(money(19.98)));
        assert!(ledger.history()[0].item().price().approx_eq(money(9.99)));
    }
}

mod observers {
    use super::*;

    #[test]
    fn every_observer_sees_the_placed_order() {
        let mut ledger = Ledger::new();
        let kitchen = Rc::new(KitchenDisplay::new());
        let sales = Rc::new(SalesReport::new());
        let capture = Rc::new(Capture::default());
        ledger.attach(kitchen.clone());
        ledger.attach(sales.clone());
        ledger.attach(capture.clone());

        let first = ledger.place_order(MenuItem::pizza().boxed()).unwrap();
        let second = ledger.place_order(family_combo().boxed()).unwrap();

        assert_eq!(kitchen.ticket_count(), 2);
        assert_eq!(kitchen.tickets()[1].order_id, second);
        assert_eq!(sales.line("Family Combo").unwrap().count, 1);
        assert_eq!(
            *capture.seen.borrow(),
            vec![
                (first, "Pizza".to_string()),
                (second, "Family Combo".to_string())
            ]
        );
    }

    #[test]
    fn kitchen_display_starts_preparation() {
        let mut ledger = Ledger::new();
        let kitchen = Rc::new(KitchenDisplay::new());
        ledger.attach(kitchen.clone());

        ledger
            .place_order(MenuItem::burger().with_extra_cheese().with_bacon().boxed())
            .unwrap();

        assert_eq!(
            kitchen.kitchen_log().details(),
            vec!["Preparing Burger", "Adding extra cheese", "Adding crispy bacon"]
        );
    }

    #[test]
    fn observer_attached_later_only_sees_later_orders() {
        let mut ledger = Ledger::new();
        ledger.place_order(MenuItem::salad().boxed()).unwrap();

        let sales = Rc::new(SalesReport::new());
        ledger.attach(sales.clone());
        ledger.place_order(MenuItem::pizza().boxed()).unwrap();

        assert!(sales.line("Salad").is_none());
        assert_eq!(sales.line("Pizza").unwrap().count, 1);
    }
}

mod command_queue {
    use super::*;

    #[test]
    fn waiter_batches_then_flushes_in_order() {
        let mut ledger = Ledger::new();
        let capture = Rc::new(Capture::default());
        ledger.attach(capture.clone());

        let mut waiter = Waiter::new();
        waiter.take_order(PlaceOrder::new(MenuItem::pizza()));
        waiter.take_order(PlaceOrder::new(
            MenuItem::burger().with_extra_cheese().with_bacon(),
        ));
        assert!(capture.seen.borrow().is_empty());

        let ids = waiter.send_orders_to_kitchen(&mut ledger).unwrap();
        assert_eq!(ids.len(), 2);

        let names: Vec<String> = capture.seen.borrow().iter().map(|(_, n)| n.clone()).collect();
        assert_eq!(names, vec!["Pizza", "Burger + Extra Cheese + Bacon"]);

        assert!(waiter.send_orders_to_kitchen(&mut ledger).unwrap().is_empty());
        assert_eq!(ledger.total_orders(), 2);
    }

    #[test]
    fn direct_and_queued_orders_share_one_ledger() {
        let mut ledger = Ledger::new();
        let mut waiter = Waiter::new();

        waiter.take_order(PlaceOrder::new(MenuItem::pizza()));
        ledger.place_order(MenuItem::salad().boxed()).unwrap();
        waiter.send_orders_to_kitchen(&mut ledger).unwrap();

        let names: Vec<&str> = ledger.history().iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["Salad", "Pizza"]);
    }
}

mod payment {
    use super::*;

    #[test]
    fn repeated_payment_settles_same_total() {
        let mut ledger = Ledger::new();
        ledger.place_order(family_combo().boxed()).unwrap();
        ledger.place_order(MenuItem::pizza().boxed()).unwrap();

        let card = CardPayment::new("1234-5678-9876-5432", "Daniel Cojocaru").unwrap();
        let first = ledger.process_payment(&card);
        let second = ledger.process_payment(&CashPayment);

        assert!(first.amount.approx_eq(money(28.0245 + 12.99)));
        assert!(second.amount.approx_eq(first.amount));
        assert_eq!(first.method, "card");
        assert_eq!(second.method, "cash");
        assert_eq!(ledger.total_orders(), 2);
    }

    #[test]
    fn empty_ledger_settles_zero() {
        let ledger = Ledger::new();
        let settlement = ledger.process_payment(&CashPayment);
        assert!(settlement.amount.is_zero());
    }
}
