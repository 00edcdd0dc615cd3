//! The orderable capability shared by every menu shape.

use std::cell::RefCell;
use std::rc::Rc;

use crate::decorator::{AddOn, Discounted};
use crate::error::Result;
use crate::kitchen::KitchenLog;
use crate::summary::ItemSummary;
use crate::value_objects::{Money, Percent};

/// Anything that can be named, priced, prepared and served.
///
/// Implementations must always be able to answer every query:
/// - `name` is never empty
/// - `price` is never negative
/// - `prepare` and `serve` append one physical act to the log per call
pub trait Orderable: std::fmt::Debug {
    /// Returns the display name, derived from any wrapped items.
    fn name(&self) -> String;

    /// Returns the current price, computed at call time.
    fn price(&self) -> Money;

    /// Prepares the item, recording each step.
    fn prepare(&self, log: &mut KitchenLog);

    /// Serves the item, recording each step.
    fn serve(&self, log: &mut KitchenLog);

    /// Returns a structured summary of the item.
    fn describe(&self) -> ItemSummary;
}

impl<T: Orderable + ?Sized> Orderable for Box<T> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn price(&self) -> Money {
        (**self).price()
    }

    fn prepare(&self, log: &mut KitchenLog) {
        (**self).prepare(log)
    }

    fn serve(&self, log: &mut KitchenLog) {
        (**self).serve(log)
    }

    fn describe(&self) -> ItemSummary {
        (**self).describe()
    }
}

/// Shared handles let a caller keep mutating an item after handing it to a
/// bundle; the bundle sees the change on its next price query.
impl<T: Orderable + ?Sized> Orderable for Rc<RefCell<T>> {
    fn name(&self) -> String {
        self.borrow().name()
    }

    fn price(&self) -> Money {
        self.borrow().price()
    }

    fn prepare(&self, log: &mut KitchenLog) {
        self.borrow().prepare(log)
    }

    fn serve(&self, log: &mut KitchenLog) {
        self.borrow().serve(log)
    }

    fn describe(&self) -> ItemSummary {
        self.borrow().describe()
    }
}

/// Fluent wrapping for any owned orderable item.
pub trait OrderableExt: Orderable + Sized + 'static {
    /// Erases the concrete type.
    fn boxed(self) -> Box<dyn Orderable> {
        Box::new(self)
    }

    /// Wraps the item with extra cheese.
    fn with_extra_cheese(self) -> AddOn {
        AddOn::extra_cheese(self)
    }

    /// Wraps the item with bacon.
    fn with_bacon(self) -> AddOn {
        AddOn::bacon(self)
    }

    /// Wraps the item with a custom add-on.
    fn with_add_on(self, label: impl Into<String>, surcharge: Money) -> Result<AddOn> {
        AddOn::new(self, label, surcharge)
    }

    /// Wraps the item with a percentage discount.
    fn discounted(self, discount: Percent) -> Discounted {
        Discounted::new(self, discount)
    }
}

impl<T: Orderable + 'static> OrderableExt for T {}
