//! Cart state

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// A product with an associated purchase quantity.
///
/// Serializes flat (the product fields plus `quantity`), which is the shape
/// the checkout endpoint receives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// An ordered collection of cart lines, at most one per product id.
///
/// Lines live in a map keyed by product id so repeat additions merge in
/// O(1); display order is tracked separately and is insertion order.
/// Every line holds `quantity >= 1`.
#[derive(Clone, Debug)]
pub struct Cart {
    items: HashMap<String, CartItem>,
    order: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            items: HashMap::new(),
            order: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds one unit of `product`. An existing line for the same id gets its
    /// quantity bumped in place; otherwise a new line appends at the end.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.get_mut(&product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.order.push(product.id.clone());
            self.items
                .insert(product.id.clone(), CartItem { product, quantity: 1 });
        }
        self.touch();
    }

    /// Deletes the line with this id. Silent no-op when absent.
    pub fn remove(&mut self, id: &str) {
        if self.items.remove(id).is_some() {
            self.order.retain(|existing| existing != id);
            self.touch();
        }
    }

    /// Applies `delta` to the line's quantity, clamping at 1. Dropping a
    /// line entirely is [`Cart::remove`], never a side effect of this.
    /// No-op when the id is absent.
    pub fn update_quantity(&mut self, id: &str, delta: i64) {
        if let Some(item) = self.items.get_mut(id) {
            let next = i64::from(item.quantity).saturating_add(delta);
            item.quantity = next.clamp(1, i64::from(u32::MAX)) as u32;
            self.touch();
        }
    }

    /// Sum of `price * quantity` over all lines. Recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.items.values().map(CartItem::line_total).sum()
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.get(id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> Vec<&CartItem> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .collect()
    }

    /// Owned copy of the lines in insertion order, for checkout submission.
    pub fn lines(&self) -> Vec<CartItem> {
        self.items().into_iter().cloned().collect()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines (the cart badge count).
    pub fn unit_count(&self) -> u64 {
        self.items.values().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
        self.touch();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
