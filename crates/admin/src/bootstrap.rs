//! Startup catalog load.
//!
//! Order of truth at startup: the settings cache seeds the shop settings,
//! then the remote store overrides everything it has. Individual rows that
//! fail to decode are logged and skipped so one bad row cannot take the
//! whole menu down.

use hott_rossi_core::{Addon, Catalog, Product, SETTINGS_ROW_ID, Settings};
use serde_json::Value;

use crate::cache::SettingsCache;
use crate::remote::dual::collapse_dual;
use crate::remote::{RemoteStore, RemoteStoreError, Table};

/// Load the catalog from the remote store.
///
/// Settings resolution: cached blob if present, overridden by the remote
/// singleton row (id = 1) when that row exists and decodes. Products and
/// addons come from the remote alone; an empty remote means an empty menu
/// until `seed` is run.
///
/// # Errors
///
/// Returns the transport error when a table fetch itself fails. Decode
/// failures of individual rows never do.
pub async fn load_catalog(
    remote: &dyn RemoteStore,
    cache: &SettingsCache,
) -> Result<Catalog, RemoteStoreError> {
    let seed = cache.load().unwrap_or_default();

    let products: Vec<Product> =
        decode_rows(remote.fetch_all(Table::Products).await?, Table::Products);
    let addons: Vec<Addon> = decode_rows(remote.fetch_all(Table::Addons).await?, Table::Addons);

    let settings = remote
        .fetch_all(Table::Settings)
        .await?
        .into_iter()
        .find(is_settings_row)
        .and_then(
            |row| match serde_json::from_value::<Settings>(collapse_dual(row)) {
                Ok(settings) => Some(settings),
                Err(error) => {
                    tracing::warn!(%error, "remote settings row failed to decode, keeping the seed");
                    None
                }
            },
        )
        .unwrap_or(seed);

    tracing::info!(
        products = products.len(),
        addons = addons.len(),
        "catalog loaded"
    );
    Ok(Catalog::new(products, addons, settings))
}

/// The singleton settings row, whether its id arrived as a number or a
/// string.
fn is_settings_row(row: &Value) -> bool {
    row.get("id").is_some_and(|id| {
        id.as_i64() == Some(SETTINGS_ROW_ID) || id.as_str() == Some("1")
    })
}

fn decode_rows<T: serde::de::DeserializeOwned>(rows: Vec<Value>, table: Table) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.get("id").cloned().unwrap_or(Value::Null);
            match serde_json::from_value(collapse_dual(row)) {
                Ok(entity) => Some(entity),
                Err(error) => {
                    tracing::warn!(%table, %id, %error, "skipping row that failed to decode");
                    None
                }
            }
        })
        .collect()
}
