//! API endpoint modules.

mod record;
mod view;
mod zone;

pub use record::RecordApi;
pub use view::ViewApi;
pub use zone::AuthZoneApi;

/// Build an exact-equality filter expression (`field=="value"`).
///
/// Embedded quotes and backslashes in the value are escaped so the
/// expression stays well-formed.
pub(crate) fn eq_filter(field: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("{field}==\"{escaped}\"")
}
