//! DNS view endpoints.

use crate::DdiClient;
use ddi_core::{ListViewsResponse, Result, View};

const VIEW_PATH: &str = "/api/ddi/v1/dns/view";

/// DNS view endpoints
pub struct ViewApi<'a> {
    client: &'a DdiClient,
}

impl<'a> ViewApi<'a> {
    pub(crate) fn new(client: &'a DdiClient) -> Self {
        Self { client }
    }

    /// List views matching a raw filter expression
    pub async fn list(&self, filter: &str) -> Result<Vec<View>> {
        let response: ListViewsResponse = self
            .client
            .get_with_query(VIEW_PATH, &[("_filter", filter), ("_inherit", "full")])
            .await?;
        Ok(response.results)
    }

    /// List views whose name matches `name` exactly
    pub async fn by_name(&self, name: &str) -> Result<Vec<View>> {
        self.list(&super::eq_filter("name", name)).await
    }
}
