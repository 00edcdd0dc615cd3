//! Structured descriptions of orderable items.

use serde::{Deserialize, Serialize};

use crate::item::Recipe;
use crate::value_objects::{Money, Percent};

/// Summary returned by [`Orderable::describe`](crate::Orderable::describe).
///
/// Two items are structurally equal when their summaries are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemSummary {
    /// A leaf menu item.
    Item {
        name: String,
        price: Money,
        recipe: Recipe,
    },

    /// A flat surcharge on top of the wrapped item.
    AddOn {
        name: String,
        price: Money,
        label: String,
        surcharge: Money,
        inner: Box<ItemSummary>,
    },

    /// A percentage discount on the wrapped item.
    Discounted {
        name: String,
        price: Money,
        original_price: Money,
        discount: Percent,
        inner: Box<ItemSummary>,
    },

    /// A bundle of items.
    Bundle(BundleSummary),
}

impl ItemSummary {
    /// Returns the summarized name.
    pub fn name(&self) -> &str {
        match self {
            ItemSummary::Item { name, .. }
            | ItemSummary::AddOn { name, .. }
            | ItemSummary::Discounted { name, .. } => name,
            ItemSummary::Bundle(bundle) => &bundle.name,
        }
    }

    /// Returns the summarized price.
    pub fn price(&self) -> Money {
        match self {
            ItemSummary::Item { price, .. }
            | ItemSummary::AddOn { price, .. }
            | ItemSummary::Discounted { price, .. } => *price,
            ItemSummary::Bundle(bundle) => bundle.total,
        }
    }

    /// Renders the summary as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One line of a bundle summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleLine {
    pub name: String,
    pub price: Money,
}

/// Breakdown of a bundle's price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleSummary {
    pub name: String,
    pub item_count: usize,
    pub items: Vec<BundleLine>,
    pub subtotal: Money,
    /// Present only when a non-zero discount applies.
    pub discount: Option<Percent>,
    pub savings: Money,
    pub total: Money,
}

impl std::fmt::Display for BundleSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Combo: {}", self.name.to_uppercase())?;
        writeln!(f, "Contains {} items:", self.item_count)?;
        for line in &self.items {
            writeln!(f, "  {} - {}", line.name, line.price)?;
        }
        writeln!(f, "Subtotal: {}", self.subtotal)?;
        if let Some(discount) = self.discount {
            writeln!(f, "Combo Discount: {discount}")?;
            writeln!(f, "You Save: {}", self.savings)?;
        }
        write!(f, "TOTAL: {}", self.total)
    }
}
