//! Synchronization status for the external publish trigger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome surface for the most recently resolved publish call.
///
/// Transitions: `Idle -> Syncing -> Success | Error -> Idle`. The tracker in
/// the admin crate owns the transitions and the timed reverts back to `Idle`;
/// this type only carries the observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SyncStatus {
    #[default]
    Idle,
    Syncing,
    Success {
        at: DateTime<Utc>,
    },
    Error {
        message: String,
    },
}

impl SyncStatus {
    /// Whether a publish call is currently in flight.
    #[must_use]
    pub const fn is_syncing(&self) -> bool {
        matches!(self, Self::Syncing)
    }

    /// Whether the tracker has settled back to its resting state.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_discriminate_variants() {
        let json = serde_json::to_value(SyncStatus::Error {
            message: "deploy hook 502".to_owned(),
        })
        .expect("serialize");
        assert_eq!(json["state"], "error");
        assert_eq!(json["message"], "deploy hook 502");

        let idle: SyncStatus = serde_json::from_value(serde_json::json!({ "state": "idle" }))
            .expect("deserialize");
        assert!(idle.is_idle());
    }
}
