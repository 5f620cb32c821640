//! Integration tests for seeding and the startup load.
//!
//! `rossi-cli seed` upserts the default menu with dual-cased payloads; the
//! startup load reads those rows back into a catalog. This file drives both
//! halves against the in-memory store and pins seed idempotence.

use serde_json::Value;

use hott_rossi_admin::bootstrap::load_catalog;
use hott_rossi_admin::remote::dual::dual_keyed;
use hott_rossi_admin::remote::{MemoryStore, RemoteStore, Table};
use hott_rossi_core::SETTINGS_ROW_ID;
use hott_rossi_core::catalog::seed::{default_menu, default_settings};
use hott_rossi_integration_tests::temp_cache;

/// What the seed command writes: every product plus the singleton settings
/// row, all via upsert.
async fn seed(store: &MemoryStore) {
    for product in default_menu() {
        store
            .upsert(Table::Products, dual_keyed(&product).expect("payload"))
            .await
            .expect("product upsert");
    }
    let mut payload = dual_keyed(&default_settings()).expect("payload");
    if let Value::Object(map) = &mut payload {
        map.insert("id".to_owned(), Value::from(SETTINGS_ROW_ID));
    }
    store
        .upsert(Table::Settings, payload)
        .await
        .expect("settings upsert");
}

// =============================================================================
// Round Trip
// =============================================================================

#[tokio::test]
async fn test_seed_then_load_round_trips_the_menu() {
    let store = MemoryStore::new();
    seed(&store).await;

    let catalog = load_catalog(&store, &temp_cache()).await.expect("load");

    let menu = default_menu();
    assert_eq!(catalog.products().len(), menu.len());
    for seeded in &menu {
        let loaded = catalog
            .product(&seeded.id)
            .unwrap_or_else(|| panic!("{} did not load back", seeded.id));
        assert_eq!(loaded, seeded);
    }
    assert_eq!(catalog.settings().shop_name, "Hott Rossi");
}

#[tokio::test]
async fn test_reseeding_converges_instead_of_duplicating() {
    let store = MemoryStore::new();
    seed(&store).await;
    seed(&store).await;

    assert_eq!(store.rows(Table::Products).len(), default_menu().len());
    assert_eq!(store.rows(Table::Settings).len(), 1);

    let catalog = load_catalog(&store, &temp_cache()).await.expect("load");
    assert_eq!(catalog.products().len(), default_menu().len());
}

#[tokio::test]
async fn test_seeded_highlights_survive_the_round_trip() {
    let store = MemoryStore::new();
    seed(&store).await;

    let catalog = load_catalog(&store, &temp_cache()).await.expect("load");

    let highlights = catalog.highlights();
    assert_eq!(highlights.len(), 2, "the launch menu ships two highlights");
    assert!(highlights.iter().all(|p| p.promo_text.is_some()));
}
