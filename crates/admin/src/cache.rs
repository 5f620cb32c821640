//! Local settings cache.
//!
//! Settings are cached as a JSON blob under the fixed application key
//! `hott_rossi_settings` so the shop banner, logo, and WhatsApp number
//! survive a restart without waiting for the remote store. The cache is
//! written on every committed settings change and read once at startup as a
//! seed; it is never the source of truth.

use std::fs;
use std::path::{Path, PathBuf};

use hott_rossi_core::Settings;
use thiserror::Error;

/// Application key the settings blob is stored under.
pub const SETTINGS_CACHE_KEY: &str = "hott_rossi_settings";

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to serialize settings for the cache: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write settings cache at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File-backed settings cache.
#[derive(Debug, Clone)]
pub struct SettingsCache {
    path: PathBuf,
}

impl SettingsCache {
    /// Cache rooted in the given directory; the blob lives in
    /// `hott_rossi_settings.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{SETTINGS_CACHE_KEY}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached settings, if any.
    ///
    /// A missing file means a first run and returns `None` quietly. An
    /// unreadable or undecodable blob is logged and treated the same; the
    /// caller falls back to defaults either way.
    #[must_use]
    pub fn load(&self) -> Option<Settings> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read settings cache");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "settings cache is not valid JSON, ignoring it");
                None
            }
        }
    }

    /// Write the settings blob, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` when serialization or the filesystem write
    /// fails. The blob is small and written synchronously.
    pub fn store(&self, settings: &Settings) -> Result<(), CacheError> {
        let blob = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, blob).map_err(|source| CacheError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "hott-rossi-cache-{tag}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn round_trips_settings_through_the_blob() {
        let dir = temp_dir("round-trip");
        let cache = SettingsCache::new(&dir);
        let settings = Settings {
            shop_name: "Hott Rossi".to_owned(),
            logo_url: "https://example.test/logo.png".to_owned(),
            promo_banner: Some("Frete grátis hoje!".to_owned()),
            whatsapp_number: Some("5511988887777".to_owned()),
        };

        cache.store(&settings).unwrap();
        assert_eq!(cache.load(), Some(settings));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = temp_dir("missing");
        let cache = SettingsCache::new(&dir);
        assert_eq!(cache.load(), None);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn corrupt_blob_loads_as_none() {
        let dir = temp_dir("corrupt");
        let cache = SettingsCache::new(&dir);
        fs::write(cache.path(), "{not json").unwrap();

        assert_eq!(cache.load(), None);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_name_carries_the_application_key() {
        let cache = SettingsCache::new("/tmp");
        assert!(cache
            .path()
            .ends_with("hott_rossi_settings.json"));
    }
}
