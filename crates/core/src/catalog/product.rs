//! Sellable menu items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AddonId, Category, ProductId};

/// Placeholder image assigned when a product is created without one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=400";

/// Which highlight flag a toggle operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFlag {
    Promo,
    BestSeller,
}

/// A sellable menu item.
///
/// Field names serialize in the remote store's canonical camelCase spelling;
/// the lowercase `alias` attributes additionally accept rows written under the
/// all-lowercase column convention, so either casing decodes. The linked addon
/// IDs travel under the wire name `addons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    #[serde(alias = "imageurl")]
    pub image_url: String,
    #[serde(default, alias = "ispromo")]
    pub is_promo: bool,
    #[serde(default, alias = "isbestseller")]
    pub is_best_seller: bool,
    #[serde(default, alias = "promotext", skip_serializing_if = "Option::is_none")]
    pub promo_text: Option<String>,
    #[serde(default, rename = "addons")]
    pub addon_ids: Vec<AddonId>,
}

impl Product {
    /// Whether the addon is linked to this product.
    #[must_use]
    pub fn has_addon(&self, addon_id: &AddonId) -> bool {
        self.addon_ids.contains(addon_id)
    }

    /// Whether the product appears in the highlights rail.
    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        self.is_promo || self.is_best_seller
    }

    /// Flip a highlight flag, deriving the badge label.
    ///
    /// Turning a flag on overwrites the label ("Promoção" or "Destaque");
    /// turning it off keeps whatever label was there before, so a product can
    /// retain a hand-written badge after a flag round-trip.
    #[must_use]
    pub fn with_flag_toggled(mut self, flag: ProductFlag) -> Self {
        match flag {
            ProductFlag::Promo => {
                self.is_promo = !self.is_promo;
                if self.is_promo {
                    self.promo_text = Some("Promoção".to_owned());
                }
            }
            ProductFlag::BestSeller => {
                self.is_best_seller = !self.is_best_seller;
                if self.is_best_seller {
                    self.promo_text = Some("Destaque".to_owned());
                }
            }
        }
        self
    }

    /// Link the addon if absent, unlink it if present.
    #[must_use]
    pub fn with_addon_toggled(mut self, addon_id: &AddonId) -> Self {
        if self.has_addon(addon_id) {
            self.addon_ids.retain(|id| id != addon_id);
        } else {
            self.addon_ids.push(addon_id.clone());
        }
        self
    }

    /// Drop a reference to the addon, if present.
    #[must_use]
    pub fn without_addon(mut self, addon_id: &AddonId) -> Self {
        self.addon_ids.retain(|id| id != addon_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> Product {
        Product {
            id: ProductId::new("p-calabresa"),
            name: "Calabresa Acebolada".to_owned(),
            description: "Molho de tomate artesanal, mussarela e calabresa.".to_owned(),
            price: Decimal::new(4590, 2),
            category: Category::Pizzas,
            image_url: "https://example.com/calabresa.jpg".to_owned(),
            is_promo: false,
            is_best_seller: false,
            promo_text: None,
            addon_ids: Vec::new(),
        }
    }

    #[test]
    fn serializes_camel_case_wire_names() {
        let json = serde_json::to_value(pizza()).expect("serialize");
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("isPromo").is_some());
        assert!(json.get("isBestSeller").is_some());
        assert!(json.get("addons").is_some());
        // Absent label stays absent instead of serializing null.
        assert!(json.get("promoText").is_none());
    }

    #[test]
    fn decodes_lowercase_rows() {
        let row = serde_json::json!({
            "id": "1724500000000",
            "name": "Portuguesa",
            "description": "Presunto, ovos e azeitonas.",
            "price": 48.90,
            "category": "Pizzas",
            "imageurl": "https://example.com/portuguesa.jpg",
            "ispromo": true,
            "promotext": "Promoção",
            "addons": ["a-1"],
        });
        let product: Product = serde_json::from_value(row).expect("deserialize");
        assert_eq!(product.image_url, "https://example.com/portuguesa.jpg");
        assert!(product.is_promo);
        assert!(!product.is_best_seller);
        assert_eq!(product.promo_text.as_deref(), Some("Promoção"));
        assert_eq!(product.addon_ids, vec![AddonId::new("a-1")]);
    }

    #[test]
    fn flag_on_overwrites_label_flag_off_keeps_it() {
        let product = pizza().with_flag_toggled(ProductFlag::Promo);
        assert!(product.is_promo);
        assert_eq!(product.promo_text.as_deref(), Some("Promoção"));

        let product = product.with_flag_toggled(ProductFlag::BestSeller);
        assert_eq!(product.promo_text.as_deref(), Some("Destaque"));

        let product = product.with_flag_toggled(ProductFlag::BestSeller);
        assert!(!product.is_best_seller);
        assert_eq!(product.promo_text.as_deref(), Some("Destaque"));
    }

    #[test]
    fn addon_toggle_links_and_unlinks() {
        let addon = AddonId::new("a-borda");
        let product = pizza().with_addon_toggled(&addon);
        assert!(product.has_addon(&addon));

        let product = product.with_addon_toggled(&addon);
        assert!(!product.has_addon(&addon));
    }
}
