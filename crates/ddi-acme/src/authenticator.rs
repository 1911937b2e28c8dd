//! The challenge authenticator lifecycle.

use crate::credentials::Credentials;
use crate::error::{AcmeError, CleanupFailure};
use crate::plugin;
use crate::resolver::resolve_zone;
use async_trait::async_trait;
use chrono::Local;
use ddi_client::{DdiClient, DEFAULT_BASE_URL};
use ddi_core::CreateRecordRequest;
use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};

/// The lifecycle contract a host framework drives.
///
/// Both methods are safe to call repeatedly across multiple domains within
/// one issuance run; the host guarantees they are never invoked
/// concurrently on the same authenticator.
#[async_trait]
pub trait Dns01Authenticator {
    /// Publish the validation token as a TXT record for `domain`
    async fn perform(
        &mut self,
        domain: &str,
        record_name: &str,
        token: &str,
    ) -> Result<(), AcmeError>;

    /// Remove every challenge record published so far
    async fn cleanup(
        &mut self,
        domain: &str,
        record_name: &str,
        token: &str,
    ) -> Result<(), AcmeError>;
}

/// DNS-01 authenticator for Infoblox Universal DDI.
///
/// One authenticator serves one certificate-issuance run; it may publish
/// records for several domains before a single cleanup tears them all down.
pub struct Authenticator {
    credentials: Credentials,
    base_url: String,
    client: OnceCell<DdiClient>,
    handles: Vec<String>,
    ttl: u32,
}

impl Authenticator {
    /// Create an authenticator from loaded credentials
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: OnceCell::new(),
            handles: Vec::new(),
            ttl: plugin::TTL,
        }
    }

    /// Point the authenticator at a different CSP endpoint (testing, staging)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Record ids created but not yet deleted, in creation order
    #[must_use]
    pub fn pending_handles(&self) -> &[String] {
        &self.handles
    }

    /// Get the API client, constructing it on first use.
    ///
    /// Idempotent: later calls return the same client for the rest of the
    /// run.
    pub fn client(&self) -> &DdiClient {
        self.client.get_or_init(|| {
            DdiClient::builder(self.credentials.api_key())
                .base_url(self.base_url.clone())
                .build()
        })
    }

    async fn perform_inner(
        &mut self,
        domain: &str,
        record_name: &str,
        token: &str,
    ) -> Result<(), AcmeError> {
        let client = self.client().clone();

        let zone = resolve_zone(&client, domain, self.credentials.view()).await?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let request = CreateRecordRequest::txt(record_name, token, zone, self.ttl)
            .comment(format!("{timestamp}: ddi-acme for {domain}"));

        let record = client.records().create(&request).await?;
        info!(domain, id = %record.id, "published challenge record");
        self.handles.push(record.id);

        Ok(())
    }

    async fn cleanup_inner(&mut self) -> Result<(), AcmeError> {
        let client = self.client().clone();

        if self.handles.is_empty() {
            debug!("no challenge records pending deletion");
            return Ok(());
        }

        // Snapshot the handle list and clear it up front; every deletion is
        // attempted exactly once even when an earlier one fails.
        let pending = std::mem::take(&mut self.handles);
        let mut failures = Vec::new();

        for record_id in pending {
            match client.records().delete(&record_id).await {
                Ok(()) => info!(id = %record_id, "removed challenge record"),
                Err(error) => {
                    warn!(id = %record_id, %error, "failed to remove challenge record");
                    failures.push(CleanupFailure { record_id, error });
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(AcmeError::Cleanup { failures })
        }
    }
}

#[async_trait]
impl Dns01Authenticator for Authenticator {
    async fn perform(
        &mut self,
        domain: &str,
        record_name: &str,
        token: &str,
    ) -> Result<(), AcmeError> {
        self.perform_inner(domain, record_name, token).await
    }

    async fn cleanup(
        &mut self,
        _domain: &str,
        _record_name: &str,
        _token: &str,
    ) -> Result<(), AcmeError> {
        self.cleanup_inner().await
    }
}
