//! Zone identifier resolution
//!
//! A user-supplied identifier containing a `.` names a domain; anything else is
//! an opaque hosted zone id.

use futures::{Stream, TryStreamExt};
use r53q_provider::{HostedZone, ProviderError, HOSTED_ZONE_PREFIX};

use crate::error::{CoreError, CoreResult};

/// A parsed zone identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneRef {
    /// Fully qualified domain name, always with a trailing dot.
    Domain(String),
    /// Zone id as given (bare or `/hostedzone/`-prefixed).
    Id(String),
}

impl ZoneRef {
    pub fn parse(identifier: &str) -> Self {
        if !identifier.contains('.') {
            return Self::Id(identifier.to_string());
        }
        if identifier.ends_with('.') {
            Self::Domain(identifier.to_string())
        } else {
            Self::Domain(format!("{identifier}."))
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Exact, case-sensitive comparison against the zone's name or id.
    pub fn matches(&self, zone: &HostedZone) -> bool {
        match self {
            Self::Domain(name) => zone.name == *name,
            Self::Id(id) => {
                zone.id == *id
                    || zone
                        .id
                        .strip_prefix(HOSTED_ZONE_PREFIX)
                        .is_some_and(|bare| bare == id)
            }
        }
    }
}

/// First zone in `zones` matching `identifier`.
///
/// `zones` is consumed only up to the match, so a paginated stream stops
/// fetching once the zone is found.
pub async fn resolve_zone<S>(identifier: &str, mut zones: S) -> CoreResult<HostedZone>
where
    S: Stream<Item = Result<HostedZone, ProviderError>> + Unpin,
{
    let zone_ref = ZoneRef::parse(identifier);
    while let Some(zone) = zones.try_next().await? {
        if zone_ref.matches(&zone) {
            return Ok(zone);
        }
    }
    Err(CoreError::ZoneNotFound(identifier.to_string()))
}
