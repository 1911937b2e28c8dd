//! Zone resolution.
//!
//! A challenge record must land in the authoritative zone that serves the
//! target domain *within the configured view* - the same fqdn can exist in
//! several views with different contents.

use crate::error::AcmeError;
use ddi_client::DdiClient;
use tracing::debug;

/// Resolve the zone to attach a challenge record to.
///
/// Looks up the view by exact name, then picks the first zone whose fqdn
/// matches `domain` and whose view reference matches the resolved view.
/// Both lookups hit the API on every call; view/zone topology is stable
/// within an issuance run, so nothing is invalidated by the repetition.
pub async fn resolve_zone(
    client: &DdiClient,
    domain: &str,
    view_name: &str,
) -> Result<String, AcmeError> {
    let views = client.views().by_name(view_name).await?;
    let view = views.first().ok_or_else(|| AcmeError::ViewNotFound {
        name: view_name.to_string(),
    })?;
    debug!(view = %view_name, id = %view.id, "resolved view");

    let zones = client.zones().by_fqdn(domain).await?;
    let zone = zones
        .iter()
        .find(|z| z.in_view(&view.id))
        .ok_or_else(|| AcmeError::ZoneNotFound {
            fqdn: domain.to_string(),
            view: view_name.to_string(),
        })?;
    debug!(fqdn = %domain, id = %zone.id, "resolved zone");

    Ok(zone.id.clone())
}
