//! Print the catalog as the storefront would load it.

use tracing::info;

use hott_rossi_admin::bootstrap::load_catalog;
use hott_rossi_admin::remote::RestStore;
use hott_rossi_admin::{AdminConfig, SettingsCache};
use hott_rossi_core::{Category, format_brl};

/// Load the catalog from the remote store and print a summary.
///
/// # Errors
///
/// Returns an error if environment variables are missing or the remote
/// fetch fails.
pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;
    let remote = RestStore::new(&config);
    let cache = SettingsCache::new(&config.cache_dir);

    let catalog = load_catalog(&remote, &cache).await?;
    let settings = catalog.settings();

    info!("Catalog for {}", settings.shop_name);
    info!("========================");
    for category in Category::ALL {
        let items = catalog.by_category(category);
        if items.is_empty() {
            continue;
        }
        info!("{} ({}):", category, items.len());
        for product in items {
            info!("  {} - {}", product.name, format_brl(product.price));
        }
    }

    if !catalog.addons().is_empty() {
        info!("Addons ({}):", catalog.addons().len());
        for addon in catalog.addons() {
            info!("  {} - {}", addon.name, format_brl(addon.price));
        }
    }

    if let Some(number) = &settings.whatsapp_number {
        info!("WhatsApp: {number}");
    }
    Ok(())
}
