//! Resource record endpoints.

use crate::DdiClient;
use ddi_core::{CreateRecordRequest, CreateRecordResponse, Record, Result};

const RECORD_PATH: &str = "/api/ddi/v1/dns/record";

/// Resource record endpoints
pub struct RecordApi<'a> {
    client: &'a DdiClient,
}

impl<'a> RecordApi<'a> {
    pub(crate) fn new(client: &'a DdiClient) -> Self {
        Self { client }
    }

    /// Create a resource record, returning the created record with its id
    pub async fn create(&self, request: &CreateRecordRequest) -> Result<Record> {
        let response: CreateRecordResponse = self.client.post(RECORD_PATH, request).await?;
        Ok(response.result)
    }

    /// Delete a resource record by id
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{RECORD_PATH}/{id}")).await
    }
}
