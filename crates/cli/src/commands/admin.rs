//! Gated admin mutations.
//!
//! # Usage
//!
//! ```bash
//! # Create a product
//! rossi-cli admin add-product -c 116289 -n "Pizza Margherita" -p 45.90 --category Pizzas
//!
//! # Toggle a product's promo flag
//! rossi-cli admin toggle-flag -c 116289 -p 1724500000000 -f promo
//!
//! # Rename the shop
//! rossi-cli admin set-shop-name -c 116289 -n "HOTT ROSSI"
//! ```
//!
//! # Environment Variables
//!
//! - `SUPABASE_URL` - Base URL of the remote store
//! - `SUPABASE_ANON_KEY` - Anon key sent with every request
//! - `REBUILD_HOOK_URL` - Optional; fired after a committed mutation

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{error, info};

use hott_rossi_admin::bootstrap::load_catalog;
use hott_rossi_admin::remote::RestStore;
use hott_rossi_admin::sync::{NoopTrigger, RebuildHook};
use hott_rossi_admin::{
    AdminConfig, MutationGateway, NewAddon, NewProduct, SettingsCache, SyncService, SyncTrigger,
    gate,
};
use hott_rossi_core::{AddonId, CatalogStore, Category, ProductFlag, ProductId, Settings};

/// Errors specific to the admin commands.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The access code did not match.
    #[error("Admin code refused")]
    CodeRefused,

    /// Unrecognized flag name.
    #[error("Invalid flag: {0}. Valid flags: promo, best-seller")]
    InvalidFlag(String),

    /// Unparseable price argument.
    #[error("Invalid price: {0}. Expected a decimal amount like 45.90")]
    InvalidPrice(String),

    /// Unrecognized category name.
    #[error("Invalid category: {0}. Valid categories: Pizzas, Pastéis, Combos, Bebidas, Sobremesas")]
    InvalidCategory(String),
}

/// Create a product and commit it.
///
/// # Errors
///
/// Returns an error if the code is refused, the price or category does not
/// parse, or the remote write fails.
pub async fn add_product(
    code: &str,
    name: &str,
    description: &str,
    price: &str,
    category: &str,
    image_url: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !gate::verify(code) {
        return Err(AdminError::CodeRefused.into());
    }
    let price: Decimal = price
        .parse()
        .map_err(|_| AdminError::InvalidPrice(price.to_owned()))?;
    let category: Category = category
        .parse()
        .map_err(|_| AdminError::InvalidCategory(category.to_owned()))?;

    let config = AdminConfig::from_env()?;
    let gateway = build_gateway(&config).await?;

    let product = gateway
        .create_product(NewProduct {
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            category,
            image_url,
        })
        .await?;
    info!(id = %product.id, name = %product.name, "Product committed");

    fire_hook(&config).await;
    Ok(())
}

/// Delete a product.
///
/// # Errors
///
/// Returns an error if the code is refused, the product id is unknown, or
/// the remote write fails.
pub async fn delete_product(
    code: &str,
    product_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !gate::verify(code) {
        return Err(AdminError::CodeRefused.into());
    }

    let config = AdminConfig::from_env()?;
    let gateway = build_gateway(&config).await?;

    gateway.delete_product(&ProductId::new(product_id)).await?;
    info!(id = %product_id, "Product deleted");

    fire_hook(&config).await;
    Ok(())
}

/// Toggle a product flag and report the product's new state.
///
/// # Errors
///
/// Returns an error if the code is refused, the flag or product id is
/// unknown, or the remote write fails.
pub async fn toggle_flag(
    code: &str,
    product_id: &str,
    flag: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !gate::verify(code) {
        return Err(AdminError::CodeRefused.into());
    }
    let flag = parse_flag(flag)?;

    let config = AdminConfig::from_env()?;
    let gateway = build_gateway(&config).await?;

    let product = gateway
        .toggle_product_flag(&ProductId::new(product_id), flag)
        .await?;
    info!(
        id = %product.id,
        promo = product.is_promo,
        best_seller = product.is_best_seller,
        "Product committed"
    );

    fire_hook(&config).await;
    Ok(())
}

/// Link an addon to a product, or unlink it when already linked.
///
/// # Errors
///
/// Returns an error if the code is refused, either id is unknown, or the
/// remote write fails.
pub async fn toggle_addon(
    code: &str,
    product_id: &str,
    addon_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !gate::verify(code) {
        return Err(AdminError::CodeRefused.into());
    }

    let config = AdminConfig::from_env()?;
    let gateway = build_gateway(&config).await?;

    let product = gateway
        .toggle_product_addon(&ProductId::new(product_id), &AddonId::new(addon_id))
        .await?;
    let linked = product.addon_ids.contains(&AddonId::new(addon_id));
    info!(id = %product.id, addon = %addon_id, linked, "Product committed");

    fire_hook(&config).await;
    Ok(())
}

/// Create an addon and commit it.
///
/// # Errors
///
/// Returns an error if the code is refused, the price does not parse, or
/// the remote write fails.
pub async fn add_addon(
    code: &str,
    name: &str,
    price: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !gate::verify(code) {
        return Err(AdminError::CodeRefused.into());
    }
    let price: Decimal = price
        .parse()
        .map_err(|_| AdminError::InvalidPrice(price.to_owned()))?;

    let config = AdminConfig::from_env()?;
    let gateway = build_gateway(&config).await?;

    let addon = gateway
        .create_addon(NewAddon {
            name: name.to_owned(),
            price,
        })
        .await?;
    info!(id = %addon.id, name = %addon.name, "Addon committed");

    fire_hook(&config).await;
    Ok(())
}

/// Delete an addon and clear it from every product that offers it.
///
/// # Errors
///
/// Returns an error if the code is refused, the addon id is unknown, or
/// any of the writes fail. A failed product rewrite after the delete is
/// reported with the ids still referencing the addon.
pub async fn delete_addon(code: &str, addon_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !gate::verify(code) {
        return Err(AdminError::CodeRefused.into());
    }

    let config = AdminConfig::from_env()?;
    let gateway = build_gateway(&config).await?;

    gateway.delete_addon(&AddonId::new(addon_id)).await?;
    info!(id = %addon_id, "Addon deleted and unlinked");

    fire_hook(&config).await;
    Ok(())
}

/// Rename the shop and commit the new settings.
///
/// # Errors
///
/// Returns an error if the code is refused, environment variables are
/// missing, or the remote write fails.
pub async fn set_shop_name(code: &str, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !gate::verify(code) {
        return Err(AdminError::CodeRefused.into());
    }

    let config = AdminConfig::from_env()?;
    let gateway = build_gateway(&config).await?;

    let settings = Settings {
        shop_name: name.to_owned(),
        ..gateway.store().settings()
    };
    gateway.update_settings(settings).await?;
    info!(shop_name = %name, "Settings committed");

    fire_hook(&config).await;
    Ok(())
}

fn parse_flag(flag: &str) -> Result<ProductFlag, AdminError> {
    match flag {
        "promo" => Ok(ProductFlag::Promo),
        "best-seller" => Ok(ProductFlag::BestSeller),
        other => Err(AdminError::InvalidFlag(other.to_owned())),
    }
}

/// Load the catalog and wire a gateway over it.
///
/// The gateway's background sync schedule is a no-op here; [`fire_hook`]
/// calls the hook inline so the outcome is reported before the process
/// exits.
async fn build_gateway(
    config: &AdminConfig,
) -> Result<MutationGateway, Box<dyn std::error::Error>> {
    let remote = RestStore::new(config);
    let cache = SettingsCache::new(&config.cache_dir);

    let catalog = load_catalog(&remote, &cache).await?;
    info!(
        products = catalog.products().len(),
        addons = catalog.addons().len(),
        "Catalog loaded"
    );

    Ok(MutationGateway::new(
        CatalogStore::new(catalog),
        remote,
        SyncService::new(NoopTrigger),
        cache,
    ))
}

async fn fire_hook(config: &AdminConfig) {
    let Some(url) = config.rebuild_hook_url.clone() else {
        info!("No rebuild hook configured, skipping");
        return;
    };
    match RebuildHook::new(url).fire().await {
        Ok(()) => info!("Rebuild hook accepted the request"),
        Err(e) => error!("Rebuild hook failed: {e}"),
    }
}
