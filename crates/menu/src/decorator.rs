//! Decorators that wrap exactly one orderable item.
//!
//! Every decorator computes its price from the wrapped item's price at query
//! time, so chains are evaluated inside-out and the nesting order matters:
//!
//! ```text
//! Discounted(AddOn(P, S), D)  = (P + S) × (1 − D/100)
//! AddOn(Discounted(P, D), S)  =  P × (1 − D/100) + S
//! ```

use crate::error::{MenuError, Result};
use crate::kitchen::{KitchenLog, Station};
use crate::orderable::Orderable;
use crate::summary::ItemSummary;
use crate::value_objects::{Money, Percent};

/// A flat surcharge on the wrapped item, e.g. extra cheese.
#[derive(Debug)]
pub struct AddOn {
    inner: Box<dyn Orderable>,
    label: String,
    surcharge: Money,
    prep_note: String,
}

impl AddOn {
    /// Surcharge for extra cheese.
    pub const EXTRA_CHEESE_SURCHARGE: Money = Money::from_dollars_unchecked(1.50);

    /// Surcharge for bacon.
    pub const BACON_SURCHARGE: Money = Money::from_dollars_unchecked(2.50);

    /// Wraps `inner` with a custom add-on.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::EmptyLabel`] if the label is blank.
    pub fn new(
        inner: impl Orderable + 'static,
        label: impl Into<String>,
        surcharge: Money,
    ) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(MenuError::EmptyLabel);
        }
        let prep_note = format!("Adding {}", label.to_lowercase());
        Ok(Self {
            inner: Box::new(inner),
            label,
            surcharge,
            prep_note,
        })
    }

    fn standard(inner: Box<dyn Orderable>, label: &str, surcharge: Money, note: &str) -> Self {
        Self {
            inner,
            label: label.to_string(),
            surcharge,
            prep_note: note.to_string(),
        }
    }

    /// Wraps `inner` with extra cheese (+$1.50).
    pub fn extra_cheese(inner: impl Orderable + 'static) -> Self {
        Self::standard(
            Box::new(inner),
            "Extra Cheese",
            Self::EXTRA_CHEESE_SURCHARGE,
            "Adding extra cheese",
        )
    }

    /// Wraps `inner` with bacon (+$2.50).
    pub fn bacon(inner: impl Orderable + 'static) -> Self {
        Self::standard(
            Box::new(inner),
            "Bacon",
            Self::BACON_SURCHARGE,
            "Adding crispy bacon",
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn surcharge(&self) -> Money {
        self.surcharge
    }

    /// Returns the wrapped item.
    pub fn inner(&self) -> &dyn Orderable {
        self.inner.as_ref()
    }

    /// Unwraps the decorator, returning the wrapped item.
    pub fn into_inner(self) -> Box<dyn Orderable> {
        self.inner
    }
}

impl Orderable for AddOn {
    fn name(&self) -> String {
        format!("{} + {}", self.inner.name(), self.label)
    }

    fn price(&self) -> Money {
        self.inner.price() + self.surcharge
    }

    fn prepare(&self, log: &mut KitchenLog) {
        self.inner.prepare(log);
        log.record(Station::Prepare, self.prep_note.clone());
    }

    fn serve(&self, log: &mut KitchenLog) {
        self.inner.serve(log);
    }

    fn describe(&self) -> ItemSummary {
        ItemSummary::AddOn {
            name: self.name(),
            price: self.price(),
            label: self.label.clone(),
            surcharge: self.surcharge,
            inner: Box::new(self.inner.describe()),
        }
    }
}

/// A percentage discount on the wrapped item.
#[derive(Debug)]
pub struct Discounted {
    inner: Box<dyn Orderable>,
    discount: Percent,
}

impl Discounted {
    /// Wraps `inner` with a discount. The percentage is validated by
    /// [`Percent::new`], so the price can never drop below zero.
    pub fn new(inner: impl Orderable + 'static, discount: Percent) -> Self {
        Self {
            inner: Box::new(inner),
            discount,
        }
    }

    pub fn discount(&self) -> Percent {
        self.discount
    }

    /// Returns the wrapped item.
    pub fn inner(&self) -> &dyn Orderable {
        self.inner.as_ref()
    }

    /// Unwraps the decorator, returning the wrapped item.
    pub fn into_inner(self) -> Box<dyn Orderable> {
        self.inner
    }
}

impl Orderable for Discounted {
    fn name(&self) -> String {
        format!("{} ({} OFF)", self.inner.name(), self.discount)
    }

    fn price(&self) -> Money {
        self.inner.price().apply_discount(self.discount)
    }

    fn prepare(&self, log: &mut KitchenLog) {
        self.inner.prepare(log);
    }

    fn serve(&self, log: &mut KitchenLog) {
        self.inner.serve(log);
    }

    fn describe(&self) -> ItemSummary {
        let original_price = self.inner.price();
        ItemSummary::Discounted {
            name: self.name(),
            price: original_price.apply_discount(self.discount),
            original_price,
            discount: self.discount,
            inner: Box::new(self.inner.describe()),
        }
    }
}
