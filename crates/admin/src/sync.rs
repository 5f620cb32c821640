//! External sync trigger and status tracking.
//!
//! Every committed mutation schedules exactly one call to the external sync
//! trigger (in production a deploy rebuild hook). The call is fire-and-forget
//! relative to the mutation result; its outcome lands in the
//! [`SyncStatusTracker`], which drives the operator-facing indicator through
//! `idle → syncing → success|error → idle`. A success reverts to idle after
//! 3 seconds, an error after 5. Overlapping calls are allowed; the tracker
//! shows the most recent state change, and a stale auto-revert can never
//! clobber a newer one.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use hott_rossi_core::SyncStatus;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// How long a success outcome stays visible.
pub const SUCCESS_REVERT: Duration = Duration::from_secs(3);
/// How long an error outcome stays visible.
pub const ERROR_REVERT: Duration = Duration::from_secs(5);

// ============================================================================
// Trigger
// ============================================================================

#[derive(Debug, Error)]
pub enum SyncTriggerError {
    #[error("sync trigger transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("sync trigger reported failure: {0}")]
    Reported(String),
}

/// Parameterless external sync call.
#[async_trait]
pub trait SyncTrigger: Send + Sync {
    async fn fire(&self) -> Result<(), SyncTriggerError>;
}

/// Deploy rebuild hook: POSTs to a configured URL and reads back
/// `{"success": bool, "error": string?}`.
pub struct RebuildHook {
    client: reqwest::Client,
    url: Url,
}

impl RebuildHook {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct HookResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl SyncTrigger for RebuildHook {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fire(&self) -> Result<(), SyncTriggerError> {
        let response = self.client.post(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncTriggerError::Reported(format!(
                "rebuild hook returned HTTP {status}"
            )));
        }
        let body: HookResponse = response.json().await?;
        if body.success {
            Ok(())
        } else {
            Err(SyncTriggerError::Reported(body.error.unwrap_or_else(
                || "rebuild hook reported failure without detail".to_owned(),
            )))
        }
    }
}

/// Trigger used when no rebuild hook is configured; resolves immediately so
/// the status indicator still pulses on every commit.
pub struct NoopTrigger;

#[async_trait]
impl SyncTrigger for NoopTrigger {
    async fn fire(&self) -> Result<(), SyncTriggerError> {
        Ok(())
    }
}

// ============================================================================
// Status tracker
// ============================================================================

#[derive(Default)]
struct TrackerInner {
    status: SyncStatus,
    epoch: u64,
}

/// Shared sync indicator state.
///
/// Every state change bumps an epoch. Auto-reverts are scheduled against the
/// epoch of the change that created them and only apply while that epoch is
/// still current, so a slow revert cannot overwrite a newer call's state.
#[derive(Clone, Default)]
pub struct SyncStatusTracker {
    inner: Arc<Mutex<TrackerInner>>,
}

impl SyncStatusTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TrackerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current indicator state.
    #[must_use]
    pub fn status(&self) -> SyncStatus {
        self.lock().status.clone()
    }

    /// Mark a sync call as in flight.
    pub fn begin(&self) {
        let mut inner = self.lock();
        inner.status = SyncStatus::Syncing;
        inner.epoch += 1;
    }

    /// Record a call's outcome. Returns the epoch of this resolution and how
    /// long it should stay visible before [`Self::revert_if_current`].
    pub fn resolve(&self, outcome: &Result<(), SyncTriggerError>) -> (u64, Duration) {
        let mut inner = self.lock();
        inner.epoch += 1;
        match outcome {
            Ok(()) => {
                inner.status = SyncStatus::Success { at: Utc::now() };
                (inner.epoch, SUCCESS_REVERT)
            }
            Err(error) => {
                inner.status = SyncStatus::Error {
                    message: error.to_string(),
                };
                (inner.epoch, ERROR_REVERT)
            }
        }
    }

    /// Revert to idle, unless a newer state change happened since `epoch`.
    pub fn revert_if_current(&self, epoch: u64) {
        let mut inner = self.lock();
        if inner.epoch == epoch {
            inner.status = SyncStatus::Idle;
        }
    }
}

// ============================================================================
// Service
// ============================================================================

/// Owns the trigger and tracker; [`Self::schedule`] is what the gateway
/// calls once per committed mutation.
#[derive(Clone)]
pub struct SyncService {
    trigger: Arc<dyn SyncTrigger>,
    tracker: SyncStatusTracker,
}

impl SyncService {
    pub fn new(trigger: impl SyncTrigger + 'static) -> Self {
        Self {
            trigger: Arc::new(trigger),
            tracker: SyncStatusTracker::new(),
        }
    }

    #[must_use]
    pub fn tracker(&self) -> &SyncStatusTracker {
        &self.tracker
    }

    /// Fire the trigger on a detached task and keep the tracker honest
    /// through resolution and auto-revert. Detaching means a dropped caller
    /// never loses the status bookkeeping.
    pub fn schedule(&self) {
        let trigger = Arc::clone(&self.trigger);
        let tracker = self.tracker.clone();
        tokio::spawn(async move {
            tracker.begin();
            let outcome = trigger.fire().await;
            if let Err(error) = &outcome {
                tracing::warn!(%error, "external sync failed");
            }
            let (epoch, delay) = tracker.resolve(&outcome);
            tokio::time::sleep(delay).await;
            tracker.revert_if_current(epoch);
        });
    }
}
