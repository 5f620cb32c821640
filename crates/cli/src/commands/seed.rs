//! Seed the remote store with the default menu.
//!
//! Rows are written with upsert so re-running the command converges on the
//! same state instead of failing on duplicate ids. Payloads go through the
//! dual-casing serializer, matching what the admin gateway writes.

use serde_json::Value;
use tracing::info;

use hott_rossi_admin::AdminConfig;
use hott_rossi_admin::remote::dual::dual_keyed;
use hott_rossi_admin::remote::{MemoryStore, RemoteStore, RestStore, Table};
use hott_rossi_core::SETTINGS_ROW_ID;
use hott_rossi_core::catalog::seed::{default_menu, default_settings};

/// Upsert the default menu and settings.
///
/// # Errors
///
/// Returns an error if environment variables are missing or a remote write
/// is refused.
pub async fn menu(dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
    if dry_run {
        let store = MemoryStore::default();
        let products = write_menu(&store).await?;
        info!("Dry run complete (nothing written remotely)");
        info!("  Products upserted: {products}");
        info!("  Settings row: {SETTINGS_ROW_ID}");
        return Ok(());
    }

    let config = AdminConfig::from_env()?;
    let store = RestStore::new(&config);
    let products = write_menu(&store).await?;

    info!("Seeding complete!");
    info!("  Products upserted: {products}");
    info!("  Settings row: {SETTINGS_ROW_ID}");
    Ok(())
}

async fn write_menu(store: &dyn RemoteStore) -> Result<usize, Box<dyn std::error::Error>> {
    let products = default_menu();
    for product in &products {
        info!(id = %product.id, name = %product.name, "Upserting product");
        store.upsert(Table::Products, dual_keyed(product)?).await?;
    }

    let mut payload = dual_keyed(&default_settings())?;
    if let Value::Object(map) = &mut payload {
        map.insert("id".to_owned(), Value::from(SETTINGS_ROW_ID));
    }
    store.upsert(Table::Settings, payload).await?;

    Ok(products.len())
}
