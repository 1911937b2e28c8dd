use serde::{Deserialize, Serialize};

/// TXT record data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxtRdata {
    /// The text payload (the ACME validation token for challenge records)
    pub text: String,
}

/// A DNS resource record as returned by the record endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Opaque resource identifier
    pub id: String,

    /// Absolute owner name of the record
    #[serde(default)]
    pub name: Option<String>,

    /// Record type ("TXT" for challenge records)
    #[serde(default, rename = "type")]
    pub record_type: Option<String>,

    /// Identifier of the zone the record lives in
    #[serde(default)]
    pub zone: Option<String>,

    /// Time to live in seconds
    #[serde(default)]
    pub ttl: Option<u32>,

    /// Free-form comment
    #[serde(default)]
    pub comment: Option<String>,
}

/// Request body for creating a TXT record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    /// Absolute owner name of the record
    pub name: String,

    /// Record type
    #[serde(rename = "type")]
    pub record_type: String,

    /// Record data
    pub rdata: TxtRdata,

    /// Owner name relative to the zone origin (leftmost label)
    pub name_in_zone: String,

    /// Identifier of the zone to attach the record to
    pub zone: String,

    /// Time to live in seconds
    pub ttl: u32,

    /// Free-form comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateRecordRequest {
    /// Build a TXT record request for the given owner name and token.
    ///
    /// The relative owner name is the leftmost label of `name`, mirroring
    /// how challenge records sit directly under the zone apex.
    #[must_use]
    pub fn txt(
        name: impl Into<String>,
        text: impl Into<String>,
        zone: impl Into<String>,
        ttl: u32,
    ) -> Self {
        let name = name.into();
        let name_in_zone = name
            .split_once('.')
            .map_or_else(|| name.clone(), |(label, _)| label.to_string());

        Self {
            name,
            record_type: String::from("TXT"),
            rdata: TxtRdata { text: text.into() },
            name_in_zone,
            zone: zone.into(),
            ttl,
            comment: None,
        }
    }

    /// Attach a comment to the request
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Create envelope returned by the record endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    /// The created record
    pub result: Record,
}
