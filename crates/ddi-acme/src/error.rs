//! Error types for the authenticator.

use ddi_core::DdiError;
use thiserror::Error;

/// A record deletion that failed during cleanup
#[derive(Debug)]
pub struct CleanupFailure {
    /// Id of the record that could not be deleted
    pub record_id: String,
    /// The error the deletion produced
    pub error: DdiError,
}

/// Errors that can occur while solving a challenge
#[derive(Error, Debug)]
pub enum AcmeError {
    /// Credentials file is missing, unreadable, or lacks a required key
    #[error("credentials error: {0}")]
    Credentials(String),

    /// The configured view does not exist
    #[error("view '{name}' not found")]
    ViewNotFound {
        /// The view name that was looked up
        name: String,
    },

    /// No authoritative zone matches both the domain and the view
    #[error("no authoritative zone for '{fqdn}' in view '{view}'")]
    ZoneNotFound {
        /// The domain that was looked up
        fqdn: String,
        /// The view the zone was required to belong to
        view: String,
    },

    /// A remote API call failed; propagated unchanged
    #[error(transparent)]
    Api(#[from] DdiError),

    /// One or more record deletions failed during cleanup
    #[error("cleanup failed for {} of the pending records", failures.len())]
    Cleanup {
        /// The deletions that failed, in attempt order
        failures: Vec<CleanupFailure>,
    },
}

impl AcmeError {
    /// Returns true if the error means the challenge record was never created
    #[must_use]
    pub const fn is_resolution_failure(&self) -> bool {
        matches!(self, Self::ViewNotFound { .. } | Self::ZoneNotFound { .. })
    }
}
