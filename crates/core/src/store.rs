//! Shared handle over the in-memory catalog.

use std::sync::{Arc, PoisonError, RwLock};

use crate::catalog::{Addon, Catalog, Product, Settings};
use crate::types::{AddonId, ProductId};

/// Cloneable shared handle over the [`Catalog`].
///
/// The mutation gateway is the only writer, and it writes only after the
/// remote store has confirmed the change; every other caller reads. Guards
/// stay inside the closure and are never held across an await point, so the
/// std lock is sufficient.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<Catalog>>,
}

impl CatalogStore {
    /// Wrap an already-loaded catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Run a closure over a read view of the catalog.
    pub fn with<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run a closure with mutable access to the catalog.
    pub fn update<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Clone out the full catalog.
    #[must_use]
    pub fn snapshot(&self) -> Catalog {
        self.with(Clone::clone)
    }

    /// Clone out the current settings record.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.with(|catalog| catalog.settings().clone())
    }

    /// Clone out a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.with(|catalog| catalog.product(id).cloned())
    }

    /// Clone out an addon by ID.
    #[must_use]
    pub fn addon(&self, id: &AddonId) -> Option<Addon> {
        self.with(|catalog| catalog.addon(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn clones_share_the_same_catalog() {
        let store = CatalogStore::default();
        let view = store.clone();

        store.update(|catalog| {
            catalog.upsert_addon(Addon {
                id: AddonId::new("a-1"),
                name: "Borda Recheada".to_owned(),
                price: Decimal::new(1200, 2),
            });
        });

        assert!(view.addon(&AddonId::new("a-1")).is_some());
    }

    #[test]
    fn settings_reads_reflect_updates() {
        let store = CatalogStore::default();
        store.update(|catalog| {
            let mut settings = catalog.settings().clone();
            settings.promo_banner = Some("Entrega grátis hoje!".to_owned());
            catalog.set_settings(settings);
        });

        assert_eq!(
            store.settings().promo_banner.as_deref(),
            Some("Entrega grátis hoje!")
        );
    }
}
