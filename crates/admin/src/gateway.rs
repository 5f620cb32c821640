//! The mutation gateway.
//!
//! Single writer of the catalog. Every admin edit follows the same path:
//! build a dual-keyed payload, submit it to the remote store, and only after
//! the remote confirms apply the same change to the in-memory catalog and
//! schedule one external sync call. A rejected remote write leaves local
//! state untouched and surfaces the remote's message verbatim; there is no
//! rollback path because nothing is applied before confirmation.
//!
//! Concurrent edits to the same entity are not serialized here; the remote
//! store's last-write-wins ordering is the only guarantee.

use std::sync::Arc;

use hott_rossi_core::{
    Addon, AddonId, CatalogStore, Category, DEFAULT_IMAGE_URL, Product, ProductFlag, ProductId,
    SETTINGS_ROW_ID, Settings,
};
use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

use crate::cache::SettingsCache;
use crate::remote::dual::dual_keyed;
use crate::remote::{RemoteStore, RemoteStoreError, Table};
use crate::sync::SyncService;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum MutationError {
    /// A required field is missing or out of range; nothing was submitted.
    #[error("validation failed: {field} is required")]
    Validation { field: &'static str },

    /// The remote store refused the write; local state is unchanged.
    #[error(transparent)]
    Remote(#[from] RemoteStoreError),

    /// The target row does not exist in the catalog.
    #[error("{table} row {id} not found")]
    NotFound { table: Table, id: String },

    /// An addon was deleted remotely but one or more referencing products
    /// could not be rewritten; their `addon_ids` still name the dead addon.
    #[error("addon {addon_id} deleted, but {} product(s) still reference it", dangling.len())]
    ReferentialGap {
        addon_id: AddonId,
        dangling: Vec<ProductId>,
    },

    #[error("failed to encode remote payload: {0}")]
    Encode(#[from] serde_json::Error),
}

// ============================================================================
// Drafts
// ============================================================================

/// Operator input for a new product. Flags start off, addon links empty.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    /// Empty or absent gets the placeholder image.
    pub image_url: Option<String>,
}

/// Operator input for a new addon.
#[derive(Debug, Clone)]
pub struct NewAddon {
    pub name: String,
    pub price: Decimal,
}

fn validate(name: &str, price: Decimal) -> Result<(), MutationError> {
    if name.is_empty() {
        return Err(MutationError::Validation { field: "name" });
    }
    if price <= Decimal::ZERO {
        return Err(MutationError::Validation { field: "price" });
    }
    Ok(())
}

// ============================================================================
// Gateway
// ============================================================================

/// Applies admin edits remote-first, then locally, then schedules sync.
pub struct MutationGateway {
    store: CatalogStore,
    remote: Arc<dyn RemoteStore>,
    sync: SyncService,
    cache: SettingsCache,
}

impl MutationGateway {
    pub fn new(
        store: CatalogStore,
        remote: impl RemoteStore + 'static,
        sync: SyncService,
        cache: SettingsCache,
    ) -> Self {
        Self {
            store,
            remote: Arc::new(remote),
            sync,
            cache,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    #[must_use]
    pub const fn sync(&self) -> &SyncService {
        &self.sync
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// Create a product. The id is the current Unix timestamp in
    /// milliseconds; a missing image gets the placeholder URL.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty name or non-positive price, `Remote` when
    /// the store refuses the insert.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_product(&self, draft: NewProduct) -> Result<Product, MutationError> {
        validate(&draft.name, draft.price)?;
        let product = Product {
            id: ProductId::generate(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            image_url: draft
                .image_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_owned()),
            is_promo: false,
            is_best_seller: false,
            promo_text: None,
            addon_ids: Vec::new(),
        };

        let payload = dual_keyed(&product)?;
        self.remote.insert(Table::Products, payload).await?;
        self.store
            .update(|catalog| catalog.upsert_product(product.clone()));
        tracing::info!(id = %product.id, "product created");
        self.sync.schedule();
        Ok(product)
    }

    /// Rewrite a product row wholesale.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation` and `Remote` as on create.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn update_product(&self, product: Product) -> Result<(), MutationError> {
        validate(&product.name, product.price)?;
        self.require_product(&product.id)?;

        let payload = dual_keyed(&product)?;
        self.remote
            .update(Table::Products, product.id.as_str(), payload)
            .await?;
        tracing::info!(id = %product.id, "product updated");
        self.store.update(|catalog| catalog.upsert_product(product));
        self.sync.schedule();
        Ok(())
    }

    /// Delete a product row.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Remote` when the delete is refused.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), MutationError> {
        self.require_product(id)?;

        self.remote.delete(Table::Products, id.as_str()).await?;
        self.store.update(|catalog| catalog.remove_product(id));
        tracing::info!(%id, "product deleted");
        self.sync.schedule();
        Ok(())
    }

    /// Toggle a highlight flag. Turning a flag on overwrites the promo label
    /// with the flag's stock label; turning it off keeps whatever label is
    /// there.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Remote` when the rewrite is refused.
    #[instrument(skip(self), fields(id = %id, flag = ?flag))]
    pub async fn toggle_product_flag(
        &self,
        id: &ProductId,
        flag: ProductFlag,
    ) -> Result<Product, MutationError> {
        let current = self.require_product(id)?;
        let updated = current.with_flag_toggled(flag);
        self.commit_product_rewrite(updated).await
    }

    /// Link the addon to the product, or unlink it when already linked.
    ///
    /// # Errors
    ///
    /// `NotFound` when either id is unknown, `Remote` when the rewrite is
    /// refused.
    #[instrument(skip(self), fields(product = %product_id, addon = %addon_id))]
    pub async fn toggle_product_addon(
        &self,
        product_id: &ProductId,
        addon_id: &AddonId,
    ) -> Result<Product, MutationError> {
        if self.store.addon(addon_id).is_none() {
            return Err(MutationError::NotFound {
                table: Table::Addons,
                id: addon_id.to_string(),
            });
        }
        let current = self.require_product(product_id)?;
        let updated = current.with_addon_toggled(addon_id);
        self.commit_product_rewrite(updated).await
    }

    // ------------------------------------------------------------------
    // Addons
    // ------------------------------------------------------------------

    /// Create an addon with a timestamp id.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty name or non-positive price, `Remote` when
    /// the insert is refused.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_addon(&self, draft: NewAddon) -> Result<Addon, MutationError> {
        validate(&draft.name, draft.price)?;
        let addon = Addon {
            id: AddonId::generate(),
            name: draft.name,
            price: draft.price,
        };

        let payload = dual_keyed(&addon)?;
        self.remote.insert(Table::Addons, payload).await?;
        self.store
            .update(|catalog| catalog.upsert_addon(addon.clone()));
        tracing::info!(id = %addon.id, "addon created");
        self.sync.schedule();
        Ok(addon)
    }

    /// Rewrite an addon row.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation` and `Remote` as on create.
    #[instrument(skip(self, addon), fields(id = %addon.id))]
    pub async fn update_addon(&self, addon: Addon) -> Result<(), MutationError> {
        validate(&addon.name, addon.price)?;
        if self.store.addon(&addon.id).is_none() {
            return Err(MutationError::NotFound {
                table: Table::Addons,
                id: addon.id.to_string(),
            });
        }

        let payload = dual_keyed(&addon)?;
        self.remote
            .update(Table::Addons, addon.id.as_str(), payload)
            .await?;
        tracing::info!(id = %addon.id, "addon updated");
        self.store.update(|catalog| catalog.upsert_addon(addon));
        self.sync.schedule();
        Ok(())
    }

    /// Delete an addon and clear it from every product that references it.
    ///
    /// The cascade is sequenced and individually observable: the addon row
    /// is deleted first, then each referencing product is rewritten with one
    /// remote update. Rewrites that succeed are applied locally even when
    /// others fail.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id. `Remote` when the addon delete itself
    /// is refused (nothing changes). `ReferentialGap` when the addon is gone
    /// but some product rewrites failed; those products keep the dangling
    /// reference remotely. The sync trigger still fires once in that case,
    /// because remote data did change.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_addon(&self, id: &AddonId) -> Result<(), MutationError> {
        if self.store.addon(id).is_none() {
            return Err(MutationError::NotFound {
                table: Table::Addons,
                id: id.to_string(),
            });
        }

        let referencing: Vec<Product> = self.store.with(|catalog| {
            catalog
                .products_referencing(id)
                .into_iter()
                .cloned()
                .collect()
        });
        let rewrites = referencing
            .into_iter()
            .map(|product| {
                let updated = product.without_addon(id);
                dual_keyed(&updated).map(|payload| (updated, payload))
            })
            .collect::<Result<Vec<(Product, Value)>, _>>()?;

        self.remote.delete(Table::Addons, id.as_str()).await?;
        self.store.update(|catalog| catalog.remove_addon(id));
        tracing::info!(%id, products = rewrites.len(), "addon deleted, clearing references");

        let mut dangling = Vec::new();
        for (updated, payload) in rewrites {
            let product_id = updated.id.clone();
            match self
                .remote
                .update(Table::Products, product_id.as_str(), payload)
                .await
            {
                Ok(()) => {
                    self.store.update(|catalog| catalog.upsert_product(updated));
                }
                Err(error) => {
                    tracing::warn!(product = %product_id, %error, "failed to clear deleted addon from product");
                    dangling.push(product_id);
                }
            }
        }

        self.sync.schedule();
        if dangling.is_empty() {
            Ok(())
        } else {
            Err(MutationError::ReferentialGap {
                addon_id: id.clone(),
                dangling,
            })
        }
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Commit new shop settings: upsert the singleton row, apply locally,
    /// rewrite the settings cache, schedule sync.
    ///
    /// A failed cache write after the commit is logged, not returned; the
    /// data is durable remotely and the cache is only a startup seed.
    ///
    /// # Errors
    ///
    /// `Remote` when the upsert is refused; local state and cache stay as
    /// they were.
    #[instrument(skip(self, settings))]
    pub async fn update_settings(&self, settings: Settings) -> Result<(), MutationError> {
        let mut payload = dual_keyed(&settings)?;
        if let Value::Object(map) = &mut payload {
            map.insert("id".to_owned(), Value::from(SETTINGS_ROW_ID));
        }

        self.remote.upsert(Table::Settings, payload).await?;
        self.store
            .update(|catalog| catalog.set_settings(settings.clone()));
        if let Err(error) = self.cache.store(&settings) {
            tracing::warn!(%error, "settings committed but the cache write failed");
        }
        tracing::info!("settings updated");
        self.sync.schedule();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn require_product(&self, id: &ProductId) -> Result<Product, MutationError> {
        self.store
            .product(id)
            .ok_or_else(|| MutationError::NotFound {
                table: Table::Products,
                id: id.to_string(),
            })
    }

    /// Remote update of a full product row, then local apply and sync.
    async fn commit_product_rewrite(&self, updated: Product) -> Result<Product, MutationError> {
        let payload = dual_keyed(&updated)?;
        self.remote
            .update(Table::Products, updated.id.as_str(), payload)
            .await?;
        self.store
            .update(|catalog| catalog.upsert_product(updated.clone()));
        tracing::info!(id = %updated.id, "product rewritten");
        self.sync.schedule();
        Ok(updated)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::remote::MemoryStore;
    use crate::sync::{NoopTrigger, SyncService};
    use hott_rossi_core::Catalog;

    fn temp_cache(tag: &str) -> SettingsCache {
        let dir = std::env::temp_dir().join(format!(
            "hott-rossi-gateway-{tag}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        SettingsCache::new(dir)
    }

    fn gateway(tag: &str) -> (MutationGateway, MemoryStore) {
        let remote = MemoryStore::new();
        let gateway = MutationGateway::new(
            CatalogStore::new(Catalog::default()),
            remote.clone(),
            SyncService::new(NoopTrigger),
            temp_cache(tag),
        );
        (gateway, remote)
    }

    fn draft(name: &str, cents: i64) -> NewProduct {
        NewProduct {
            name: name.to_owned(),
            description: String::new(),
            price: Decimal::new(cents, 2),
            category: Category::Pizzas,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn create_product_fills_placeholder_image_and_applies_locally() {
        let (gateway, remote) = gateway("create");

        let product = gateway.create_product(draft("Margherita", 5500)).await.unwrap();

        assert_eq!(product.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(gateway.store().product(&product.id), Some(product.clone()));
        let row = remote.row(Table::Products, product.id.as_str()).unwrap();
        assert_eq!(row["imageurl"], DEFAULT_IMAGE_URL);
        assert_eq!(row["imageUrl"], DEFAULT_IMAGE_URL);
    }

    #[tokio::test]
    async fn create_product_refuses_empty_name_and_free_prices() {
        let (gateway, remote) = gateway("validate");

        let err = gateway.create_product(draft("", 5500)).await.unwrap_err();
        assert!(matches!(err, MutationError::Validation { field: "name" }));

        let err = gateway.create_product(draft("Margherita", 0)).await.unwrap_err();
        assert!(matches!(err, MutationError::Validation { field: "price" }));

        assert!(remote.journal().is_empty());
    }

    #[tokio::test]
    async fn refused_insert_leaves_the_catalog_empty() {
        let (gateway, remote) = gateway("offline");
        remote.go_offline("connection refused");

        let err = gateway.create_product(draft("Margherita", 5500)).await.unwrap_err();

        assert!(err.to_string().contains("connection refused"));
        assert!(gateway.store().with(|catalog| catalog.products().is_empty()));
        assert!(remote.journal().is_empty());
    }

    #[tokio::test]
    async fn rejected_remote_write_leaves_local_state_untouched() {
        let (gateway, remote) = gateway("rejected");
        let product = gateway.create_product(draft("Margherita", 5500)).await.unwrap();

        remote.deny(
            Table::Products,
            product.id.as_str(),
            "row level security violation",
        );
        let mut renamed = product.clone();
        renamed.name = "Margherita Especial".to_owned();
        let err = gateway.update_product(renamed).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "remote store rejected the request (500): row level security violation"
        );
        assert_eq!(
            gateway.store().product(&product.id).unwrap().name,
            "Margherita"
        );
    }

    #[tokio::test]
    async fn flag_toggle_derives_the_stock_label_only_on_enable() {
        let (gateway, _remote) = gateway("flags");
        let product = gateway.create_product(draft("Margherita", 5500)).await.unwrap();

        let promoted = gateway
            .toggle_product_flag(&product.id, ProductFlag::Promo)
            .await
            .unwrap();
        assert!(promoted.is_promo);
        assert_eq!(promoted.promo_text.as_deref(), Some("Promoção"));

        let demoted = gateway
            .toggle_product_flag(&product.id, ProductFlag::Promo)
            .await
            .unwrap();
        assert!(!demoted.is_promo);
        assert_eq!(demoted.promo_text.as_deref(), Some("Promoção"));
    }

    #[tokio::test]
    async fn unknown_rows_are_reported_before_any_remote_call() {
        let (gateway, remote) = gateway("missing");

        let err = gateway
            .delete_product(&ProductId::new("ghost"))
            .await
            .unwrap_err();

        assert!(matches!(err, MutationError::NotFound { .. }));
        assert!(remote.journal().is_empty());
    }

    #[tokio::test]
    async fn settings_commit_lands_in_store_cache_and_remote_row_one() {
        let (gateway, remote) = gateway("settings");
        let settings = Settings {
            shop_name: "Hott Rossi".to_owned(),
            logo_url: String::new(),
            promo_banner: Some("Frete grátis hoje!".to_owned()),
            whatsapp_number: Some("5511988887777".to_owned()),
        };

        gateway.update_settings(settings.clone()).await.unwrap();

        assert_eq!(gateway.store().settings(), settings);
        assert_eq!(gateway.cache.load(), Some(settings));
        let row = remote.row(Table::Settings, "1").unwrap();
        assert_eq!(row["shopName"], "Hott Rossi");
        assert_eq!(row["shopname"], "Hott Rossi");
        assert_eq!(row["id"], 1);
    }
}
