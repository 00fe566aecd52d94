//! The organization's criticality threshold, as delivered by its
//! provider.
//!
//! The threshold is a single hour count per organization, fetched by a
//! collaborator outside this crate. Because that fetch is asynchronous
//! and can fail, the engine receives a tri-state value and propagates it:
//! a classification computed while the threshold is still loading, or
//! after the provider failed, is `Unknown`, never a silent default.

use serde::{Deserialize, Serialize};

/// The criticality threshold as seen at classification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ThresholdState {
    /// The provider returned the organization's threshold.
    Loaded {
        /// Maximum RTO, in hours, for a process to count as critical.
        hours: u32,
    },
    /// The provider has not answered yet.
    Loading,
    /// The provider failed; the reason is carried for display.
    Unavailable {
        /// Why the threshold could not be fetched.
        reason: String,
    },
}

impl ThresholdState {
    /// Creates a loaded threshold.
    #[must_use]
    pub const fn loaded(hours: u32) -> Self {
        Self::Loaded { hours }
    }

    /// Creates an unavailable threshold with the provider's failure
    /// reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns `true` if a threshold value is available.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Returns the threshold hours, if loaded.
    #[must_use]
    pub const fn hours(&self) -> Option<u32> {
        match self {
            Self::Loaded { hours } => Some(*hours),
            Self::Loading | Self::Unavailable { .. } => None,
        }
    }
}
