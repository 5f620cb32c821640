//! In-memory shopping cart.
//!
//! The cart never holds live catalog references. Each line snapshots the
//! product's name and price at the moment it enters the cart, so a later
//! catalog edit cannot reprice an order the customer is still assembling.

use hott_rossi_core::{Addon, Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Cart Line
// ============================================================================

/// One entry in the cart: a product snapshot plus a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    /// Addons chosen when the line was created. Listed on the order message
    /// but never priced into the total.
    #[serde(default)]
    pub selected_addons: Vec<Addon>,
}

impl CartLine {
    /// Snapshot price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

// ============================================================================
// Cart
// ============================================================================

/// Ordered collection of cart lines, at most one per product.
///
/// Lines keep insertion order so the order message lists items in the
/// sequence the customer picked them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of every line total. Addon prices are not included.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add one unit of `product` with no addons.
    ///
    /// If the product is already in the cart its quantity grows by one and
    /// the existing snapshot is kept unchanged.
    pub fn add_item(&mut self, product: &Product) {
        self.add_item_with_addons(product, Vec::new());
    }

    /// Add one unit of `product` with the given addon selection.
    ///
    /// The addon list only applies when this call creates the line. Adding a
    /// product that is already in the cart bumps the quantity and keeps the
    /// original selection.
    pub fn add_item_with_addons(&mut self, product: &Product, selected_addons: Vec<Addon>) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity: 1,
                selected_addons,
            });
        }
    }

    /// Apply a signed quantity delta to an existing line.
    ///
    /// A line whose quantity would drop to zero or below is removed, so the
    /// cart never carries a zero-quantity entry. Unknown product IDs are
    /// ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, delta: i32) {
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
        else {
            return;
        };
        let updated = i64::from(line.quantity) + i64::from(delta);
        if let Ok(quantity) = u32::try_from(updated) {
            if quantity > 0 {
                line.quantity = quantity;
                return;
            }
        }
        self.lines.retain(|line| &line.product_id != product_id);
    }

    /// Remove a line outright regardless of quantity.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product_id != product_id);
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================
