//! Integration tests for Hott Rossi.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hott-rossi-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `admin_gateway` - Mutation gateway flows (remote-first ordering,
//!   failure rollback, the addon delete cascade, settings cache)
//! - `admin_sync` - Sync pulse lifecycle under a paused clock
//! - `storefront_checkout` - Cart to WhatsApp handoff
//! - `seed_roundtrip` - Default menu seed and startup load
//!
//! Every scenario runs against the in-memory [`MemoryStore`], so no network
//! or database is required. The helpers here wire a [`MutationGateway`] over
//! that store and keep handles for asserting on the remote rows, the write
//! journal, the settings cache, and the sync trigger.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;

use hott_rossi_admin::remote::MemoryStore;
use hott_rossi_admin::sync::{SyncTrigger, SyncTriggerError};
use hott_rossi_admin::{MutationGateway, SettingsCache, SyncService};
use hott_rossi_core::{
    Addon, AddonId, Catalog, CatalogStore, Category, Product, ProductId, Settings,
};

// =============================================================================
// Sync Triggers
// =============================================================================

/// A sync trigger that succeeds and counts its calls.
#[derive(Clone, Default)]
pub struct CountingTrigger {
    fired: Arc<AtomicUsize>,
}

impl CountingTrigger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the gateway fired this trigger.
    #[must_use]
    pub fn fired(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SyncTrigger for CountingTrigger {
    async fn fire(&self) -> Result<(), SyncTriggerError> {
        self.fired.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A sync trigger that always reports a failure.
pub struct FailingTrigger;

#[async_trait]
impl SyncTrigger for FailingTrigger {
    async fn fire(&self) -> Result<(), SyncTriggerError> {
        Err(SyncTriggerError::Reported("deploy hook 502".to_owned()))
    }
}

/// A sync trigger that fails its first call and succeeds afterwards.
#[derive(Clone, Default)]
pub struct RecoveringTrigger {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl SyncTrigger for RecoveringTrigger {
    async fn fire(&self) -> Result<(), SyncTriggerError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(SyncTriggerError::Reported(
                "first deploy attempt failed".to_owned(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Gateway Harness
// =============================================================================

/// A gateway wired over the in-memory store, with handles for assertions.
pub struct Harness {
    pub gateway: MutationGateway,
    pub remote: MemoryStore,
    pub trigger: CountingTrigger,
    pub cache: SettingsCache,
}

/// Wire a [`MutationGateway`] over an in-memory remote and a fresh temp-dir
/// settings cache.
#[must_use]
pub fn harness(catalog: Catalog) -> Harness {
    let remote = MemoryStore::new();
    let trigger = CountingTrigger::new();
    let cache = SettingsCache::new(temp_cache_dir());
    let gateway = MutationGateway::new(
        CatalogStore::new(catalog),
        remote.clone(),
        SyncService::new(trigger.clone()),
        cache.clone(),
    );
    Harness {
        gateway,
        remote,
        trigger,
        cache,
    }
}

/// A settings cache rooted in a fresh temp directory.
#[must_use]
pub fn temp_cache() -> SettingsCache {
    SettingsCache::new(temp_cache_dir())
}

fn temp_cache_dir() -> PathBuf {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let n = NEXT.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("hott-rossi-it-{}-{n}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create cache dir");
    dir
}

/// Let background sync tasks run up to their revert timers.
///
/// The gateway schedules sync on a spawned task; a handful of yields gives
/// the current-thread test runtime a chance to drive it to the resolve
/// point without advancing the clock.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

// =============================================================================
// Catalog Fixtures
// =============================================================================

/// A plain product with no flags and no addon links.
#[must_use]
pub fn product(id: &str, name: &str, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: String::new(),
        price: Decimal::new(price_cents, 2),
        category: Category::Pizzas,
        image_url: "https://cdn.example/pizza.jpg".to_owned(),
        is_promo: false,
        is_best_seller: false,
        promo_text: None,
        addon_ids: Vec::new(),
    }
}

/// An addon row.
#[must_use]
pub fn addon(id: &str, name: &str, price_cents: i64) -> Addon {
    Addon {
        id: AddonId::new(id),
        name: name.to_owned(),
        price: Decimal::new(price_cents, 2),
    }
}

/// Two pizzas that both offer the `a-catupiry` addon.
#[must_use]
pub fn linked_catalog() -> Catalog {
    let mut margherita = product("p-marg", "Margherita", 5500);
    let mut calabresa = product("p-calab", "Calabresa", 4590);
    let catupiry = addon("a-catupiry", "Borda de Catupiry", 800);
    margherita.addon_ids.push(catupiry.id.clone());
    calabresa.addon_ids.push(catupiry.id.clone());
    Catalog::new(
        vec![margherita, calabresa],
        vec![catupiry],
        Settings::default(),
    )
}
