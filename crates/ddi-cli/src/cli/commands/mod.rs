//! Command implementations.

pub mod challenge;
pub mod resolve;

use std::path::PathBuf;

/// Shared context passed to every command
pub struct Context {
    /// Path to the credentials INI file
    pub credentials: PathBuf,
}
