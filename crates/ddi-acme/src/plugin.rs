//! Plugin registration surface.
//!
//! Constants a host framework (or the bundled CLI) consumes when wiring
//! this authenticator into a certificate-issuance run.

/// One-line plugin description
pub const DESCRIPTION: &str =
    "Obtain certificates using a DNS TXT record (Infoblox Universal DDI).";

/// Longer help text
pub const MORE_INFO: &str = "This plugin configures a DNS TXT record to respond to a dns-01 \
     challenge using the Infoblox Universal DDI REST API.";

/// Seconds to wait for DNS propagation before validation, unless overridden
pub const DEFAULT_PROPAGATION_SECONDS: u64 = 10;

/// Default location of the credentials INI file
pub const DEFAULT_CREDENTIALS_PATH: &str = "/etc/letsencrypt/infoblox.ini";

/// TTL for challenge records, in seconds
pub const TTL: u32 = 300;
