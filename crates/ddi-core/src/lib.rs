//! Core types and errors for the Infoblox Universal DDI API client.
//!
//! This crate provides the foundational types used across the ddi-acme
//! workspace:
//!
//! - **Types**: Strongly-typed representations of the Universal DDI
//!   resources this plugin touches (views, authoritative zones, records)
//! - **Errors**: Error handling with [`DdiError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use ddi_core::{AuthZone, DdiError, Result};
//!
//! fn pick_zone(zones: &[AuthZone], view_id: &str) -> Result<&AuthZone> {
//!     zones
//!         .iter()
//!         .find(|z| z.view == view_id)
//!         .ok_or_else(|| DdiError::NotFound {
//!             resource: "auth_zone".into(),
//!         })
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/ddi-core/0.3.0")]

mod error;
pub mod types;

pub use error::{DdiError, Result};
pub use types::*;
