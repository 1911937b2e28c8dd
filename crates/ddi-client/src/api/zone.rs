//! Authoritative zone endpoints.

use crate::DdiClient;
use ddi_core::{AuthZone, ListAuthZonesResponse, Result};

const AUTH_ZONE_PATH: &str = "/api/ddi/v1/dns/auth_zone";

/// Authoritative zone endpoints
pub struct AuthZoneApi<'a> {
    client: &'a DdiClient,
}

impl<'a> AuthZoneApi<'a> {
    pub(crate) fn new(client: &'a DdiClient) -> Self {
        Self { client }
    }

    /// List zones matching a raw filter expression
    pub async fn list(&self, filter: &str) -> Result<Vec<AuthZone>> {
        let response: ListAuthZonesResponse = self
            .client
            .get_with_query(
                AUTH_ZONE_PATH,
                &[("_filter", filter), ("_inherit", "full")],
            )
            .await?;
        Ok(response.results)
    }

    /// List zones whose fqdn matches `fqdn` exactly
    pub async fn by_fqdn(&self, fqdn: &str) -> Result<Vec<AuthZone>> {
        self.list(&super::eq_filter("fqdn", fqdn)).await
    }
}
