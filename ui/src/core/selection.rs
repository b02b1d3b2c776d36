//! Calculator session state: guest count, food context and selected products.
//!
//! One `CalculatorState` lives in the calculator view for the duration of a
//! visit. Every mutation recomputes the affected tier synchronously, so reads
//! after a mutation always reflect it.

use rust_decimal::Decimal;

use super::catalog::{Catalog, Category, PricingTier, Product};
use super::error::CalculatorError;
use super::recommend::{recommend, Recommendation, RecommendationPolicy};
use super::tiers::{self, packages_needed, resolve_tier, smallest_tier};

/// A product the visitor activated, with the units they want.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub product: Product,
    pub quantity: u32,
    pub tier: Option<PricingTier>,
}

impl Selection {
    /// Whether this selection is part of the order (and its total).
    pub fn is_active(&self) -> bool {
        self.quantity > 0 && self.tier.is_some()
    }

    pub fn line_item(&self) -> Option<LineItem<'_>> {
        let tier = self.tier.filter(|_| self.quantity > 0)?;
        Some(LineItem {
            product: &self.product,
            quantity: self.quantity,
            tier,
            packages: packages_needed(self.quantity, &tier),
            price: tiers::line_price(self.quantity, &tier),
        })
    }
}

/// A priced order line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub tier: PricingTier,
    pub packages: u32,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    guest_count: u32,
    has_other_food: bool,
    default_guest_count: u32,
    // Activation order, which is also the order lines appear in the message.
    selections: Vec<Selection>,
}

impl CalculatorState {
    pub fn new(default_guest_count: u32) -> Self {
        let default_guest_count = default_guest_count.max(1);
        Self {
            guest_count: default_guest_count,
            has_other_food: true,
            default_guest_count,
            selections: Vec::new(),
        }
    }

    pub fn guest_count(&self) -> u32 {
        self.guest_count
    }

    /// Inputs below one are clamped to one.
    pub fn set_guest_count(&mut self, guests: u32) {
        self.guest_count = guests.max(1);
    }

    pub fn has_other_food(&self) -> bool {
        self.has_other_food
    }

    pub fn set_has_other_food(&mut self, value: bool) {
        self.has_other_food = value;
    }

    pub fn recommendation(&self, policy: &RecommendationPolicy) -> Recommendation {
        recommend(self.guest_count, self.has_other_food, policy)
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn selection(&self, product_id: &str) -> Option<&Selection> {
        self.selections.iter().find(|s| s.product.id == product_id)
    }

    pub fn is_selected(&self, product_id: &str) -> bool {
        self.selection(product_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Select a product (quantity 0, smallest pack) or drop it if already selected.
    /// Returns whether the product is selected afterwards.
    pub fn toggle(&mut self, catalog: &Catalog, product_id: &str) -> Result<bool, CalculatorError> {
        if let Some(index) = self.position(product_id) {
            self.selections.remove(index);
            return Ok(false);
        }
        let product = catalog
            .find(product_id)
            .ok_or_else(|| CalculatorError::UnknownProduct(product_id.to_string()))?;
        self.selections.push(Selection {
            tier: smallest_tier(product),
            product: product.clone(),
            quantity: 0,
        });
        Ok(true)
    }

    /// Set the desired units and refresh the pack to match.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> Result<(), CalculatorError> {
        let selection = self.selection_mut(product_id)?;
        selection.quantity = quantity;
        selection.tier = if quantity > 0 {
            resolve_tier(&selection.product, quantity)
        } else {
            smallest_tier(&selection.product)
        };
        Ok(())
    }

    /// Override the pack for a selection, keeping its quantity.
    pub fn set_tier(&mut self, product_id: &str, tier: PricingTier) -> Result<(), CalculatorError> {
        let selection = self.selection_mut(product_id)?;
        if !selection.product.has_tier(&tier) {
            return Err(CalculatorError::UnknownTier {
                product: product_id.to_string(),
                quantity: tier.quantity,
            });
        }
        selection.tier = Some(tier);
        Ok(())
    }

    /// Priced lines for selections with a quantity, in activation order.
    pub fn line_items(&self) -> impl Iterator<Item = LineItem<'_>> {
        self.selections.iter().filter_map(Selection::line_item)
    }

    pub fn line_items_in(&self, category: Category) -> impl Iterator<Item = LineItem<'_>> {
        self.line_items()
            .filter(move |line| line.product.category == category)
    }

    /// Sum of `ceil(quantity / pack size) * pack price` over active selections.
    pub fn total(&self) -> Decimal {
        self.line_items().map(|line| line.price).sum()
    }

    /// Back to the initial state: nothing selected, default guests, other food served.
    pub fn reset(&mut self) {
        *self = Self::new(self.default_guest_count);
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.selections
            .iter()
            .position(|s| s.product.id == product_id)
    }

    fn selection_mut(&mut self, product_id: &str) -> Result<&mut Selection, CalculatorError> {
        self.selections
            .iter_mut()
            .find(|s| s.product.id == product_id)
            .ok_or_else(|| CalculatorError::NotSelected(product_id.to_string()))
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(20)
    }
}
