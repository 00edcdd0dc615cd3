//! Leaf menu items.

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};
use crate::kitchen::{KitchenLog, Station};
use crate::orderable::Orderable;
use crate::summary::ItemSummary;
use crate::value_objects::Money;

/// Optional recipe details of a custom item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetables: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sauce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toppings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sides: Option<String>,
}

impl Recipe {
    /// Returns true if no recipe field is set.
    pub fn is_empty(&self) -> bool {
        self == &Recipe::default()
    }
}

/// A concrete menu item with a fixed name and price.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    name: String,
    price: Money,
    recipe: Recipe,
}

impl MenuItem {
    /// Creates a new item with no recipe details.
    pub fn new(name: impl Into<String>, price: Money) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MenuError::EmptyName);
        }
        Ok(Self {
            name,
            price,
            recipe: Recipe::default(),
        })
    }

    /// Starts building a custom item.
    pub fn builder(name: impl Into<String>, price: Money) -> MenuItemBuilder {
        MenuItemBuilder {
            name: name.into(),
            price,
            recipe: Recipe::default(),
        }
    }

    fn standard(name: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            price: Money::from_dollars_unchecked(price),
            recipe: Recipe::default(),
        }
    }

    /// Standard pizza, $12.99.
    pub fn pizza() -> Self {
        Self::standard("Pizza", 12.99)
    }

    /// Standard burger, $10.99.
    pub fn burger() -> Self {
        Self::standard("Burger", 10.99)
    }

    /// Standard salad, $8.99.
    pub fn salad() -> Self {
        Self::standard("Salad", 8.99)
    }

    /// Standard pasta, $14.99.
    pub fn pasta() -> Self {
        Self::standard("Pasta", 14.99)
    }

    /// Replaces the price. Bundles holding this item through a shared
    /// handle report the new price on their next query.
    pub fn set_price(&mut self, price: Money) {
        self.price = price;
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }
}

impl Orderable for MenuItem {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn price(&self) -> Money {
        self.price
    }

    fn prepare(&self, log: &mut KitchenLog) {
        log.record(Station::Prepare, format!("Preparing {}", self.name));
    }

    fn serve(&self, log: &mut KitchenLog) {
        log.record(Station::Serve, format!("Serving {}", self.name));
    }

    fn describe(&self) -> ItemSummary {
        ItemSummary::Item {
            name: self.name.clone(),
            price: self.price,
            recipe: self.recipe.clone(),
        }
    }
}

/// Builder for custom menu items.
#[derive(Debug)]
pub struct MenuItemBuilder {
    name: String,
    price: Money,
    recipe: Recipe,
}

impl MenuItemBuilder {
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.recipe.base = Some(base.into());
        self
    }

    pub fn protein(mut self, protein: impl Into<String>) -> Self {
        self.recipe.protein = Some(protein.into());
        self
    }

    pub fn vegetables(mut self, vegetables: impl Into<String>) -> Self {
        self.recipe.vegetables = Some(vegetables.into());
        self
    }

    pub fn sauce(mut self, sauce: impl Into<String>) -> Self {
        self.recipe.sauce = Some(sauce.into());
        self
    }

    pub fn toppings(mut self, toppings: impl Into<String>) -> Self {
        self.recipe.toppings = Some(toppings.into());
        self
    }

    pub fn sides(mut self, sides: impl Into<String>) -> Self {
        self.recipe.sides = Some(sides.into());
        self
    }

    /// Builds the item.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::EmptyName`] if the name is blank.
    pub fn build(self) -> Result<MenuItem> {
        let mut item = MenuItem::new(self.name, self.price)?;
        item.recipe = self.recipe;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_prices() {
        assert!(MenuItem::pizza().price().approx_eq(Money::new(12.99).unwrap()));
        assert!(MenuItem::burger().price().approx_eq(Money::new(10.99).unwrap()));
        assert!(MenuItem::salad().price().approx_eq(Money::new(8.99).unwrap()));
        assert!(MenuItem::pasta().price().approx_eq(Money::new(14.99).unwrap()));
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert_eq!(
            MenuItem::new("   ", Money::zero()),
            Err(MenuError::EmptyName)
        );
    }

    #[test]
    fn test_price_is_stable_across_prepare_and_serve() {
        let item = MenuItem::pizza();
        let before = item.price();

        let mut log = KitchenLog::new();
        item.prepare(&mut log);
        item.serve(&mut log);
        item.prepare(&mut log);

        assert_eq!(item.price(), before);
        assert_eq!(item.price(), item.price());
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_builder_populates_recipe() {
        let item = MenuItem::builder("Custom Burger", Money::new(13.5).unwrap())
            .base("Brioche")
            .protein("Beef")
            .toppings("Pickles")
            .sauce("Special Sauce")
            .build()
            .unwrap();

        assert_eq!(item.name(), "Custom Burger");
        assert_eq!(item.recipe().base.as_deref(), Some("Brioche"));
        assert_eq!(item.recipe().protein.as_deref(), Some("Beef"));
        assert!(item.recipe().sides.is_none());
        assert!(!item.recipe().is_empty());
    }

    #[test]
    fn test_builder_rejects_blank_name() {
        let result = MenuItem::builder("", Money::zero()).base("Crust").build();
        assert_eq!(result, Err(MenuError::EmptyName));
    }

    #[test]
    fn test_describe_reports_leaf() {
        let summary = MenuItem::salad().describe();
        match summary {
            ItemSummary::Item {
                name,
                price,
                recipe,
            } => {
                assert_eq!(name, "Salad");
                assert!(price.approx_eq(Money::new(8.99).unwrap()));
                assert!(recipe.is_empty());
            }
            other => panic!("expected leaf summary, got {other:?}"),
        }
    }
}
