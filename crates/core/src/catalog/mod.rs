//! Catalog entities and the in-memory collection over them.
//!
//! The [`Catalog`] is a plain value: queries borrow, mutations take `&mut
//! self`, and nothing here performs I/O. Remote persistence and the rules for
//! when a mutation may be applied live in the admin crate's mutation gateway;
//! by the time a `Catalog` method runs, the change is already durable.

pub mod addon;
pub mod product;
pub mod seed;
pub mod settings;

pub use addon::Addon;
pub use product::{DEFAULT_IMAGE_URL, Product, ProductFlag};
pub use settings::{SETTINGS_ROW_ID, Settings};

use crate::types::{AddonId, Category, ProductId};

/// The combined set of products, addons, and shop settings.
///
/// Products and addons keep their insertion order; the storefront renders the
/// menu in the order rows arrive from the remote store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    addons: Vec<Addon>,
    settings: Settings,
}

impl Catalog {
    /// Build a catalog from already-loaded rows.
    #[must_use]
    pub const fn new(products: Vec<Product>, addons: Vec<Addon>, settings: Settings) -> Self {
        Self {
            products,
            addons,
            settings,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn addons(&self) -> &[Addon] {
        &self.addons
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn addon(&self, id: &AddonId) -> Option<&Addon> {
        self.addons.iter().find(|a| &a.id == id)
    }

    /// Products in a category, in menu order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring search over product names and descriptions.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Products flagged for the highlights rail.
    #[must_use]
    pub fn highlights(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_highlighted())
            .collect()
    }

    /// Resolve a product's linked addons, skipping references to addons that
    /// no longer exist.
    #[must_use]
    pub fn addons_for(&self, product_id: &ProductId) -> Vec<&Addon> {
        self.product(product_id).map_or_else(Vec::new, |product| {
            product
                .addon_ids
                .iter()
                .filter_map(|id| self.addon(id))
                .collect()
        })
    }

    /// Products whose addon links reference the given addon.
    #[must_use]
    pub fn products_referencing(&self, addon_id: &AddonId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.has_addon(addon_id))
            .collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert a product, or replace it in place if the ID already exists.
    pub fn upsert_product(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product,
            None => self.products.push(product),
        }
    }

    /// Remove a product. Returns whether a row was removed.
    pub fn remove_product(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        self.products.len() != before
    }

    /// Insert an addon, or replace it in place if the ID already exists.
    pub fn upsert_addon(&mut self, addon: Addon) {
        match self.addons.iter_mut().find(|a| a.id == addon.id) {
            Some(slot) => *slot = addon,
            None => self.addons.push(addon),
        }
    }

    /// Remove an addon row. Returns whether a row was removed.
    ///
    /// This does not touch product links; the mutation gateway sequences the
    /// cascading link cleanup explicitly so each rewrite is individually
    /// confirmed against the remote store first.
    pub fn remove_addon(&mut self, id: &AddonId) -> bool {
        let before = self.addons.len();
        self.addons.retain(|a| &a.id != id);
        self.addons.len() != before
    }

    /// Replace the settings record.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, name: &str, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: String::new(),
            price: Decimal::new(4500, 2),
            category,
            image_url: String::new(),
            is_promo: false,
            is_best_seller: false,
            promo_text: None,
            addon_ids: Vec::new(),
        }
    }

    fn addon(id: &str, name: &str) -> Addon {
        Addon {
            id: AddonId::new(id),
            name: name.to_owned(),
            price: Decimal::new(800, 2),
        }
    }

    #[test]
    fn upsert_replaces_in_place_preserving_menu_order() {
        let mut catalog = Catalog::default();
        catalog.upsert_product(product("p-1", "Calabresa", Category::Pizzas));
        catalog.upsert_product(product("p-2", "Portuguesa", Category::Pizzas));

        let mut updated = product("p-1", "Calabresa Acebolada", Category::Pizzas);
        updated.price = Decimal::new(4990, 2);
        catalog.upsert_product(updated);

        let names: Vec<_> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Calabresa Acebolada", "Portuguesa"]);
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let mut catalog = Catalog::default();
        let mut p = product("p-1", "Quatro Queijos", Category::Pizzas);
        p.description = "Mussarela, provolone e gorgonzola.".to_owned();
        catalog.upsert_product(p);
        catalog.upsert_product(product("b-1", "Coca-Cola 2L", Category::Bebidas));

        assert_eq!(catalog.search("queijos").len(), 1);
        assert_eq!(catalog.search("GORGONZOLA").len(), 1);
        assert_eq!(catalog.search("coca").len(), 1);
        assert!(catalog.search("picanha").is_empty());
    }

    #[test]
    fn highlights_need_either_flag() {
        let mut catalog = Catalog::default();
        let mut promo = product("p-1", "Combo Família", Category::Combos);
        promo.is_promo = true;
        let mut best = product("p-2", "Margherita", Category::Pizzas);
        best.is_best_seller = true;
        catalog.upsert_product(promo);
        catalog.upsert_product(best);
        catalog.upsert_product(product("p-3", "Portuguesa", Category::Pizzas));

        assert_eq!(catalog.highlights().len(), 2);
    }

    #[test]
    fn addons_for_skips_dangling_references() {
        let mut catalog = Catalog::default();
        catalog.upsert_addon(addon("a-1", "Borda Recheada"));
        let mut p = product("p-1", "Calabresa", Category::Pizzas);
        p.addon_ids = vec![AddonId::new("a-1"), AddonId::new("a-gone")];
        catalog.upsert_product(p);

        let resolved = catalog.addons_for(&ProductId::new("p-1"));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.first().map(|a| a.name.as_str()), Some("Borda Recheada"));
    }

    #[test]
    fn products_referencing_finds_all_linkers() {
        let mut catalog = Catalog::default();
        catalog.upsert_addon(addon("a-1", "Catupiry"));
        for id in ["p-1", "p-2"] {
            let mut p = product(id, "Pizza", Category::Pizzas);
            p.addon_ids = vec![AddonId::new("a-1")];
            catalog.upsert_product(p);
        }
        catalog.upsert_product(product("p-3", "Guaraná", Category::Bebidas));

        assert_eq!(catalog.products_referencing(&AddonId::new("a-1")).len(), 2);
    }

    #[test]
    fn remove_reports_whether_a_row_existed() {
        let mut catalog = Catalog::default();
        catalog.upsert_product(product("p-1", "Calabresa", Category::Pizzas));

        assert!(catalog.remove_product(&ProductId::new("p-1")));
        assert!(!catalog.remove_product(&ProductId::new("p-1")));
        assert!(!catalog.remove_addon(&AddonId::new("a-none")));
    }
}
