// ============ Credentials ============

/// Static AWS credentials plus the region used to pick the API partition.
#[derive(Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    /// Access key id (`AKIA...`).
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Region the caller is configured for (e.g. `"us-east-1"`, `"cn-north-1"`).
    pub region: String,
}

impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

// ============ Pagination ============

/// One page of a cursor-paginated listing.
///
/// # Type Parameters
///
/// * `T`: the item type (e.g., [`HostedZone`], [`ResourceRecordSet`]).
/// * `C`: the continuation cursor the provider returned for the next page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedResponse<T, C> {
    /// Items in the current page, in provider order.
    pub items: Vec<T>,
    /// Cursor for the next page; `None` on the last page.
    pub next_cursor: Option<C>,
}

impl<T, C> PaginatedResponse<T, C> {
    /// Create a new page.
    pub fn new(items: Vec<T>, next_cursor: Option<C>) -> Self {
        Self { items, next_cursor }
    }

    /// A page with no successor.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
        }
    }

    /// Whether there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

/// Continuation point for record set listings.
///
/// Record sets are ordered by name then type; weighted/latency sets sharing a
/// name and type are further distinguished by their set identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSetCursor {
    /// Name of the first record set on the next page.
    pub name: String,
    /// Type of the first record set on the next page.
    pub record_type: Option<String>,
    /// Set identifier of the first record set on the next page, if any.
    pub identifier: Option<String>,
}

// ============ Zone Types ============

/// Fixed path segment the provider prepends to zone identifiers.
pub const HOSTED_ZONE_PREFIX: &str = "/hostedzone/";

/// A hosted zone as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    /// Provider-qualified identifier (e.g., `"/hostedzone/Z123ABC"`).
    pub id: String,
    /// Fully qualified zone name with trailing dot (e.g., `"example.com."`).
    pub name: String,
    /// Number of record sets in the zone.
    pub record_count: u64,
}

impl HostedZone {
    /// The identifier without the `/hostedzone/` prefix.
    pub fn bare_id(&self) -> &str {
        strip_zone_prefix(&self.id)
    }

    /// The zone name without its trailing dot.
    pub fn domain(&self) -> &str {
        self.name.strip_suffix('.').unwrap_or(&self.name)
    }
}

/// Strip the `/hostedzone/` prefix from a zone identifier, if present.
pub fn strip_zone_prefix(id: &str) -> &str {
    id.strip_prefix(HOSTED_ZONE_PREFIX).unwrap_or(id)
}

// ============ Record Types ============

/// One DNS record set within a hosted zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecordSet {
    /// Fully qualified record name with trailing dot.
    pub name: String,
    /// Record type as reported by the provider (`"A"`, `"MX"`, ...).
    pub record_type: String,
    /// Time to live in seconds; `0` when the provider omits it (alias records).
    pub ttl: u64,
    /// Record values in provider order.
    pub values: Vec<String>,
    /// DNS name of the alias target, for alias record sets.
    pub alias_target: Option<String>,
}

impl ResourceRecordSet {
    /// Values joined for single-line display.
    ///
    /// Alias record sets carry no values of their own and display as `ALIAS <target>`.
    pub fn display_values(&self) -> String {
        match (&self.alias_target, self.values.is_empty()) {
            (Some(target), true) => format!("ALIAS {target}"),
            _ => self.values.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: &str, name: &str) -> HostedZone {
        HostedZone {
            id: id.to_string(),
            name: name.to_string(),
            record_count: 0,
        }
    }

    #[test]
    fn bare_id_strips_prefix() {
        assert_eq!(zone("/hostedzone/Z1", "a.com.").bare_id(), "Z1");
    }

    #[test]
    fn bare_id_keeps_unprefixed() {
        assert_eq!(zone("Z1", "a.com.").bare_id(), "Z1");
    }

    #[test]
    fn domain_strips_single_trailing_dot() {
        assert_eq!(zone("Z1", "ear.pm.").domain(), "ear.pm");
        assert_eq!(zone("Z1", "ear.pm").domain(), "ear.pm");
    }

    #[test]
    fn display_values_joins_with_comma() {
        let rrs = ResourceRecordSet {
            name: "a.com.".to_string(),
            record_type: "NS".to_string(),
            ttl: 172_800,
            values: vec!["ns-1.awsdns-00.com.".to_string(), "ns-2.awsdns-00.net.".to_string()],
            alias_target: None,
        };
        assert_eq!(rrs.display_values(), "ns-1.awsdns-00.com., ns-2.awsdns-00.net.");
    }

    #[test]
    fn display_values_alias() {
        let rrs = ResourceRecordSet {
            name: "www.a.com.".to_string(),
            record_type: "A".to_string(),
            ttl: 0,
            values: vec![],
            alias_target: Some("d111111abcdef8.cloudfront.net.".to_string()),
        };
        assert_eq!(rrs.display_values(), "ALIAS d111111abcdef8.cloudfront.net.");
    }

    #[test]
    fn page_has_more_follows_cursor() {
        let page: PaginatedResponse<u8, String> = PaginatedResponse::new(vec![1], Some("Z2".into()));
        assert!(page.has_more());
        let page: PaginatedResponse<u8, String> = PaginatedResponse::last(vec![1]);
        assert!(!page.has_more());
    }

    #[test]
    fn credentials_debug_redacts_secret() {
        let creds = AwsCredentials {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "wJalrXUtnFEMI".to_string(),
            region: "us-east-1".to_string(),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("wJalrXUtnFEMI"));
    }
}
