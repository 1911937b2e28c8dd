//! DNS-01 challenge authenticator for Infoblox Universal DDI.
//!
//! Proves domain control by publishing the ACME validation token as a TXT
//! record in a Universal DDI authoritative zone, and tears the record down
//! once validation is over. The lifecycle is driven by a host (an ACME
//! client or a hook runner) through [`Dns01Authenticator::perform`] and
//! [`Dns01Authenticator::cleanup`]:
//!
//! ```rust,ignore
//! use ddi_acme::{Authenticator, Credentials, Dns01Authenticator};
//!
//! let credentials = Credentials::load("/etc/letsencrypt/infoblox.ini")?;
//! let mut authenticator = Authenticator::new(credentials);
//!
//! authenticator
//!     .perform("example.com", "_acme-challenge.example.com", token)
//!     .await?;
//! // ... the host waits for propagation and runs validation ...
//! authenticator
//!     .cleanup("example.com", "_acme-challenge.example.com", token)
//!     .await?;
//! ```

#![doc(html_root_url = "https://docs.rs/ddi-acme/0.3.0")]

mod authenticator;
mod credentials;
mod error;
pub mod plugin;
mod resolver;

pub use authenticator::{Authenticator, Dns01Authenticator};
pub use credentials::Credentials;
pub use error::{AcmeError, CleanupFailure};
pub use resolver::resolve_zone;
