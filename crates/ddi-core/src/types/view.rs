use serde::{Deserialize, Serialize};

/// A DNS view - a namespace partition that lets the same zone name exist
/// with different contents per view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    /// Opaque resource identifier
    pub id: String,

    /// View name, unique per tenant
    #[serde(default)]
    pub name: String,

    /// Free-form comment
    #[serde(default)]
    pub comment: Option<String>,

    /// Whether the view is serving queries
    #[serde(default)]
    pub disabled: bool,
}

impl View {
    /// Returns true if this view matches the given name exactly
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

/// List envelope returned by the view endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListViewsResponse {
    /// Matching views
    #[serde(default)]
    pub results: Vec<View>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_deserializes() {
        let body = r#"{
            "results": [
                {"id": "dns/view/1001", "name": "default"},
                {"id": "dns/view/1002", "name": "internal", "disabled": true}
            ]
        }"#;
        let parsed: ListViewsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert!(parsed.results[0].is_named("default"));
        assert!(parsed.results[1].disabled);
    }

    #[test]
    fn test_missing_results_is_empty() {
        let parsed: ListViewsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_empty());
    }
}
