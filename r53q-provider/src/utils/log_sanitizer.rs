//! Log sanitization utilities
//!
//! Response bodies and signed headers are logged at `debug`; these helpers keep
//! them short and free of request signatures.

/// Maximum number of bytes of a body kept in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary at or below `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a response body for logging.
///
/// Bodies within the limit are returned unchanged; longer ones keep their
/// first `TRUNCATE_LIMIT` bytes plus a note with the full length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Replace the `Signature=` part of a SigV4 `Authorization` header.
///
/// The credential scope and signed header list stay visible.
pub fn redact_signature(authorization: &str) -> String {
    match authorization.find("Signature=") {
        Some(pos) => format!("{}Signature=<redacted>", &authorization[..pos]),
        None => authorization.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = "<ListHostedZonesResponse/>";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn body_at_limit_unchanged() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_truncated_with_length() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.ends_with(&format!("[truncated, total {} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 5 bytes per pair: the limit falls inside a char
        let s = "ü€".repeat(100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn signature_is_redacted() {
        let auth = "AWS4-HMAC-SHA256 Credential=AKID/20150830/us-east-1/route53/aws4_request, \
                    SignedHeaders=host;x-amz-date, Signature=5fa00fa3";
        let redacted = redact_signature(auth);
        assert!(redacted.ends_with("Signature=<redacted>"));
        assert!(redacted.contains("Credential=AKID/20150830"));
        assert!(!redacted.contains("5fa00fa3"));
    }

    #[test]
    fn header_without_signature_unchanged() {
        assert_eq!(redact_signature("Bearer x"), "Bearer x");
    }
}
