//! Shared test helpers

#![allow(dead_code)]

use std::env;

use r53q_provider::{AwsCredentials, Route53Provider};

/// Skip the test when any of the named environment variables is missing
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: {} is not set", $var);
                return;
            }
        )+
    };
}

/// Unwrap an `Ok`, failing the test with the error otherwise.
///
/// Only the error side needs `Debug`.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        match $expr {
            Ok(val) => val,
            Err(e) => panic!("expected Ok(..), got Err({e:?})"),
        }
    }};
}

/// Credentials that only a mock server will accept
pub fn test_credentials() -> AwsCredentials {
    AwsCredentials {
        access_key_id: "AKIDEXAMPLE".to_string(),
        secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
        region: "us-east-1".to_string(),
    }
}

/// Provider pointed at a mock server
pub fn mock_provider(uri: &str) -> Route53Provider {
    Route53Provider::builder(test_credentials())
        .endpoint(uri)
        .build()
        .expect("mock provider")
}

/// Credentials from the environment for live tests
pub fn live_credentials() -> Option<AwsCredentials> {
    Some(AwsCredentials {
        access_key_id: env::var("AWS_ACCESS_KEY_ID").ok()?,
        secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").ok()?,
        region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
    })
}

/// `ListHostedZones` body with the given `(id, name, count)` zones
pub fn zones_page(zones: &[(&str, &str, u64)], next_marker: Option<&str>) -> String {
    let items: String = zones
        .iter()
        .map(|(id, name, count)| {
            format!(
                "<HostedZone><Id>/hostedzone/{id}</Id><Name>{name}</Name>\
                 <CallerReference>ref</CallerReference>\
                 <ResourceRecordSetCount>{count}</ResourceRecordSetCount></HostedZone>"
            )
        })
        .collect();
    let tail = match next_marker {
        Some(marker) => format!("<IsTruncated>true</IsTruncated><NextMarker>{marker}</NextMarker>"),
        None => "<IsTruncated>false</IsTruncated>".to_string(),
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><ListHostedZonesResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/"><HostedZones>{items}</HostedZones>{tail}<MaxItems>100</MaxItems></ListHostedZonesResponse>"#
    )
}

/// `ListResourceRecordSets` body with `(name, type, value)` record sets
pub fn records_page(records: &[(&str, &str, &str)], next: Option<(&str, &str)>) -> String {
    let items: String = records
        .iter()
        .map(|(name, rtype, value)| {
            format!(
                "<ResourceRecordSet><Name>{name}</Name><Type>{rtype}</Type><TTL>300</TTL>\
                 <ResourceRecords><ResourceRecord><Value>{value}</Value></ResourceRecord></ResourceRecords>\
                 </ResourceRecordSet>"
            )
        })
        .collect();
    let tail = match next {
        Some((name, rtype)) => format!(
            "<IsTruncated>true</IsTruncated><NextRecordName>{name}</NextRecordName><NextRecordType>{rtype}</NextRecordType>"
        ),
        None => "<IsTruncated>false</IsTruncated>".to_string(),
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><ListResourceRecordSetsResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/"><ResourceRecordSets>{items}</ResourceRecordSets>{tail}<MaxItems>300</MaxItems></ListResourceRecordSetsResponse>"#
    )
}

/// `ErrorResponse` body
pub fn error_body(code: &str, message: &str) -> String {
    format!(
        r#"<?xml version="1.0"?><ErrorResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/"><Error><Type>Sender</Type><Code>{code}</Code><Message>{message}</Message></Error><RequestId>00000000-0000-0000-0000-000000000000</RequestId></ErrorResponse>"#
    )
}
