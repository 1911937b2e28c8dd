use serde::{Deserialize, Serialize};

/// An authoritative DNS zone, scoped to a view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthZone {
    /// Opaque resource identifier
    pub id: String,

    /// Zone origin as a fully qualified domain name
    #[serde(default)]
    pub fqdn: String,

    /// Identifier of the view this zone belongs to
    #[serde(default)]
    pub view: String,

    /// Free-form comment
    #[serde(default)]
    pub comment: Option<String>,

    /// Whether the zone is serving queries
    #[serde(default)]
    pub disabled: bool,
}

impl AuthZone {
    /// Returns true if this zone belongs to the given view
    #[must_use]
    pub fn in_view(&self, view_id: &str) -> bool {
        self.view == view_id
    }
}

/// List envelope returned by the auth_zone endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAuthZonesResponse {
    /// Matching zones
    #[serde(default)]
    pub results: Vec<AuthZone>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_view_match() {
        let body = r#"{
            "results": [
                {"id": "dns/auth_zone/a1", "fqdn": "example.com.", "view": "dns/view/1001"},
                {"id": "dns/auth_zone/a2", "fqdn": "example.com.", "view": "dns/view/1002"}
            ]
        }"#;
        let parsed: ListAuthZonesResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.results[0].in_view("dns/view/1001"));
        assert!(!parsed.results[1].in_view("dns/view/1001"));
    }
}
