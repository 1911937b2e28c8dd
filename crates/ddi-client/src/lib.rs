//! HTTP client for the Infoblox Universal DDI API.
//!
//! This crate provides the main [`DdiClient`] for the small slice of the
//! Universal DDI surface a DNS-01 authenticator needs: listing views,
//! listing authoritative zones, and creating/deleting resource records.

#![doc(html_root_url = "https://docs.rs/ddi-client/0.3.0")]

mod client;
pub mod api;

pub use client::{DdiClient, DdiClientBuilder, DEFAULT_BASE_URL};
pub use ddi_core::{DdiError, Result};
