//! Display-ready projections for UI layers.
//!
//! Prices arrive as [`rust_decimal::Decimal`] and leave here as formatted
//! strings, so rendering code never touches money arithmetic.

use hott_rossi_core::{Category, Product, format_brl};

use crate::cart::{Cart, CartLine};

// ============================================================================
// Product View
// ============================================================================

/// Product card data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Formatted as "R$ 45,90".
    pub price: String,
    pub category: Category,
    pub image_url: String,
    /// Highlight badge, present only for flagged products that carry a label.
    pub badge: Option<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        let badge = if product.is_highlighted() {
            product.promo_text.clone()
        } else {
            None
        };
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_brl(product.price),
            category: product.category,
            image_url: product.image_url.clone(),
            badge,
        }
    }
}

// ============================================================================
// Cart Views
// ============================================================================

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    /// Unit price, formatted.
    pub price: String,
    /// Quantity times unit price, formatted.
    pub line_price: String,
    pub addons: Vec<String>,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            name: line.name.clone(),
            quantity: line.quantity,
            price: format_brl(line.price),
            line_price: format_brl(line.line_total()),
            addons: line
                .selected_addons
                .iter()
                .map(|addon| addon.name.clone())
                .collect(),
        }
    }
}

/// The whole cart, ready for a drawer or checkout screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    /// Formatted cart total.
    pub total: String,
    /// Total unit count, for the cart icon bubble.
    pub item_count: u32,
}

impl CartView {
    /// An empty cart view for first render.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: format_brl(rust_decimal::Decimal::ZERO),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartLineView::from).collect(),
            total: format_brl(cart.total()),
            item_count: cart.item_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hott_rossi_core::{Addon, AddonId, ProductId};
    use rust_decimal::Decimal;

    fn calabresa() -> Product {
        Product {
            id: ProductId::new("p-calabresa"),
            name: "Calabresa".to_owned(),
            description: "Clássica".to_owned(),
            price: Decimal::new(4590, 2),
            category: Category::Pizzas,
            image_url: "https://example.test/calabresa.jpg".to_owned(),
            is_promo: true,
            is_best_seller: false,
            promo_text: Some("Promoção".to_owned()),
            addon_ids: Vec::new(),
        }
    }

    #[test]
    fn product_view_formats_price_and_carries_badge() {
        let view = ProductView::from(&calabresa());
        assert_eq!(view.price, "R$ 45,90");
        assert_eq!(view.badge.as_deref(), Some("Promoção"));
    }

    #[test]
    fn unflagged_product_has_no_badge_even_with_label() {
        let product = Product {
            is_promo: false,
            ..calabresa()
        };
        let view = ProductView::from(&product);
        assert_eq!(view.badge, None);
    }

    #[test]
    fn cart_view_renders_lines_totals_and_count() {
        let mut cart = Cart::new();
        cart.add_item_with_addons(
            &calabresa(),
            vec![Addon {
                id: AddonId::new("a-1"),
                name: "Borda Recheada".to_owned(),
                price: Decimal::new(800, 2),
            }],
        );
        cart.update_quantity(&ProductId::new("p-calabresa"), 1);

        let view = CartView::from(&cart);

        assert_eq!(view.item_count, 2);
        assert_eq!(view.total, "R$ 91,80");
        assert_eq!(view.items[0].line_price, "R$ 91,80");
        assert_eq!(view.items[0].price, "R$ 45,90");
        assert_eq!(view.items[0].addons, vec!["Borda Recheada".to_owned()]);
    }

    #[test]
    fn empty_view_shows_zero_total() {
        let view = CartView::empty();
        assert_eq!(view.total, "R$ 0,00");
        assert_eq!(view.item_count, 0);
        assert!(view.items.is_empty());
    }
}
