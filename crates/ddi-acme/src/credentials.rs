//! Credentials file handling.
//!
//! The credentials live in the certbot-style INI file at
//! `/etc/letsencrypt/infoblox.ini`:
//!
//! ```ini
//! # Infoblox Universal DDI credentials
//! api_key = 1234567
//! view = test
//! ```
//!
//! `api_key` is required; `view` defaults to `"default"` when absent.

use crate::error::AcmeError;
use std::path::Path;

/// Credentials for the Universal DDI API, loaded once per issuance run
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: String,
    view: Option<String>,
}

impl Credentials {
    /// Create credentials from already-resolved values
    #[must_use]
    pub fn new(api_key: impl Into<String>, view: Option<String>) -> Self {
        Self {
            api_key: api_key.into(),
            view,
        }
    }

    /// Load credentials from an INI-style file.
    ///
    /// Fails before any remote call is attempted when the file is
    /// unreadable or `api_key` is missing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AcmeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AcmeError::Credentials(format!("unable to read {}: {e}", path.display()))
        })?;

        Self::parse(&content).map_err(|key| {
            AcmeError::Credentials(format!("missing '{key}' in {}", path.display()))
        })
    }

    /// The API key for the CSP
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The view to create challenge records in, defaulting to `"default"`
    #[must_use]
    pub fn view(&self) -> &str {
        self.view.as_deref().unwrap_or("default")
    }

    // Parse `key = value` lines; `#`/`;` comments and `[section]` headers
    // are tolerated and ignored. Returns the missing required key on error.
    fn parse(content: &str) -> Result<Self, &'static str> {
        let mut api_key = None;
        let mut view = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(['#', ';', '[']) {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "api_key" if !value.is_empty() => api_key = Some(value.to_string()),
                "view" if !value.is_empty() => view = Some(value.to_string()),
                _ => {}
            }
        }

        let api_key = api_key.ok_or("api_key")?;
        Ok(Self { api_key, view })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_file() {
        let creds = Credentials::parse(
            "# Infoblox Universal DDI credentials\napi_key = 1234567\nview = test\n",
        )
        .unwrap();
        assert_eq!(creds.api_key(), "1234567");
        assert_eq!(creds.view(), "test");
    }

    #[test]
    fn test_view_defaults_when_absent() {
        let creds = Credentials::parse("api_key=1234567\n").unwrap();
        assert_eq!(creds.view(), "default");
    }

    #[test]
    fn test_sections_and_comments_are_ignored() {
        let creds = Credentials::parse(
            "[infoblox]\n; a comment\napi_key = 1234567\nnot a pair\nother = ignored\n",
        )
        .unwrap();
        assert_eq!(creds.api_key(), "1234567");
    }

    #[test]
    fn test_missing_api_key_is_reported() {
        assert_eq!(Credentials::parse("view = test\n").unwrap_err(), "api_key");
    }

    #[test]
    fn test_empty_api_key_is_missing() {
        assert_eq!(Credentials::parse("api_key =\n").unwrap_err(), "api_key");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = 1234567").unwrap();
        writeln!(file, "view = test").unwrap();

        let creds = Credentials::load(file.path()).unwrap();
        assert_eq!(creds.api_key(), "1234567");
        assert_eq!(creds.view(), "test");
    }

    #[test]
    fn test_load_missing_file_is_a_credentials_error() {
        let err = Credentials::load("/nonexistent/infoblox.ini").unwrap_err();
        assert!(matches!(err, AcmeError::Credentials(_)));
    }
}
