//! Bundles of orderable items sold under one name.

use crate::error::{MenuError, Result};
use crate::kitchen::{KitchenLog, Station};
use crate::orderable::Orderable;
use crate::summary::{BundleLine, BundleSummary, ItemSummary};
use crate::value_objects::{Money, Percent};

/// An ordered collection of items with an optional aggregate discount.
///
/// The price is recomputed from the children on every query:
/// `(Σ child prices) × (1 − discount/100)`.
#[derive(Debug)]
pub struct Bundle {
    name: String,
    discount: Percent,
    items: Vec<Box<dyn Orderable>>,
}

impl Bundle {
    /// Creates an empty bundle without a discount.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_discount(name, Percent::zero())
    }

    /// Creates an empty bundle with a discount.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::EmptyName`] if the name is blank.
    pub fn with_discount(name: impl Into<String>, discount: Percent) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MenuError::EmptyName);
        }
        Ok(Self {
            name,
            discount,
            items: Vec::new(),
        })
    }

    /// Appends an item.
    pub fn add(&mut self, item: impl Orderable + 'static) {
        self.items.push(Box::new(item));
    }

    /// Appends an item, returning the bundle for chaining.
    pub fn with_item(mut self, item: impl Orderable + 'static) -> Self {
        self.add(item);
        self
    }

    /// Removes the first child structurally equal to `item`.
    ///
    /// Returns `None` and leaves the bundle untouched if no child matches.
    pub fn remove(&mut self, item: &dyn Orderable) -> Option<Box<dyn Orderable>> {
        let target = item.describe();
        let index = self.items.iter().position(|i| i.describe() == target)?;
        Some(self.items.remove(index))
    }

    /// Returns the children in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &dyn Orderable> {
        self.items.iter().map(|i| i.as_ref())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn discount(&self) -> Percent {
        self.discount
    }

    /// Sum of the children's current prices, before the discount.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.price()).sum()
    }

    /// Itemized breakdown of the bundle at current prices.
    pub fn summary(&self) -> BundleSummary {
        let items: Vec<BundleLine> = self
            .items
            .iter()
            .map(|i| BundleLine {
                name: i.name(),
                price: i.price(),
            })
            .collect();
        let subtotal: Money = items.iter().map(|line| line.price).sum();
        let total = subtotal.apply_discount(self.discount);

        BundleSummary {
            name: self.name.clone(),
            item_count: items.len(),
            items,
            subtotal,
            discount: (!self.discount.is_zero()).then_some(self.discount),
            savings: subtotal.saturating_sub(total),
            total,
        }
    }
}

impl Orderable for Bundle {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn price(&self) -> Money {
        self.subtotal().apply_discount(self.discount)
    }

    fn prepare(&self, log: &mut KitchenLog) {
        log.record(Station::Prepare, format!("Preparing bundle {}", self.name));
        for item in &self.items {
            item.prepare(log);
        }
    }

    fn serve(&self, log: &mut KitchenLog) {
        log.record(Station::Serve, format!("Serving bundle {}", self.name));
        for item in &self.items {
            item.serve(log);
        }
    }

    fn describe(&self) -> ItemSummary {
        ItemSummary::Bundle(self.summary())
    }
}
