//! Fire the rebuild hook once.

use tracing::info;

use hott_rossi_admin::sync::RebuildHook;
use hott_rossi_admin::{AdminConfig, SyncTrigger};

/// Call the configured rebuild hook and report the outcome.
///
/// # Errors
///
/// Returns an error if `REBUILD_HOOK_URL` is not configured or the hook
/// reports a failure.
pub async fn fire() -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;
    let url = config.rebuild_hook_url.ok_or("REBUILD_HOOK_URL not set")?;

    info!(url = %url, "Firing rebuild hook");
    RebuildHook::new(url).fire().await?;
    info!("Rebuild hook accepted the request");
    Ok(())
}
