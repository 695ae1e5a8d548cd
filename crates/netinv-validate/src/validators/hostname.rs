//! RFC 1123 single-label hostname validation.

use std::sync::LazyLock;

use regex::Regex;

/// 1-63 letters/digits/hyphens, not starting or ending with a hyphen.
static HOSTNAME_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").expect("hostname regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostnameReason {
    Ok,
    Missing,
    TooLong,
    InvalidChars,
}

impl HostnameReason {
    pub fn label(self) -> &'static str {
        match self {
            HostnameReason::Ok => "ok",
            HostnameReason::Missing => "missing",
            HostnameReason::TooLong => "too_long",
            HostnameReason::InvalidChars => "invalid_chars",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostnameValidation {
    pub valid: bool,
    pub reason: HostnameReason,
}

pub fn validate_hostname(raw: &str) -> HostnameValidation {
    if raw.is_empty() {
        return HostnameValidation {
            valid: false,
            reason: HostnameReason::Missing,
        };
    }
    let hostname = raw.trim();
    if hostname.len() > 253 {
        return HostnameValidation {
            valid: false,
            reason: HostnameReason::TooLong,
        };
    }
    if !HOSTNAME_LABEL_REGEX.is_match(hostname) {
        return HostnameValidation {
            valid: false,
            reason: HostnameReason::InvalidChars,
        };
    }
    HostnameValidation {
        valid: true,
        reason: HostnameReason::Ok,
    }
}

/// Bare prefix test between hostname and FQDN, computed only when both are
/// non-empty. Known boundary case: hostname "db1" counts as consistent with
/// "db10.example.com" because no label-boundary check is performed.
pub fn fqdn_consistent(hostname: &str, fqdn: &str) -> Option<bool> {
    if hostname.is_empty() || fqdn.is_empty() {
        return None;
    }
    Some(fqdn.starts_with(hostname))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_hostname_is_valid() {
        assert!(validate_hostname("db01").valid);
        assert!(validate_hostname("web-server-3").valid);
        assert!(validate_hostname("a").valid);
    }

    #[test]
    fn hyphen_at_edges_is_invalid_chars() {
        assert_eq!(
            validate_hostname("-db01").reason,
            HostnameReason::InvalidChars
        );
        assert_eq!(
            validate_hostname("db01-").reason,
            HostnameReason::InvalidChars
        );
    }

    #[test]
    fn underscores_and_dots_are_invalid_chars() {
        assert_eq!(
            validate_hostname("db_01").reason,
            HostnameReason::InvalidChars
        );
        assert_eq!(
            validate_hostname("db01.example").reason,
            HostnameReason::InvalidChars
        );
    }

    #[test]
    fn label_boundary_at_63_characters() {
        let label_63 = "a".repeat(63);
        assert!(validate_hostname(&label_63).valid);
        let label_64 = "a".repeat(64);
        let result = validate_hostname(&label_64);
        assert!(!result.valid);
        assert_eq!(result.reason, HostnameReason::InvalidChars);
    }

    #[test]
    fn over_253_characters_is_too_long() {
        let huge = "a".repeat(254);
        assert_eq!(validate_hostname(&huge).reason, HostnameReason::TooLong);
    }

    #[test]
    fn fqdn_prefix_check_is_byte_wise() {
        assert_eq!(fqdn_consistent("db01", "db01.example.com"), Some(true));
        assert_eq!(fqdn_consistent("db01", "web01.example.com"), Some(false));
        assert_eq!(fqdn_consistent("", "db01.example.com"), None);
        assert_eq!(fqdn_consistent("db01", ""), None);
        // Case-sensitive.
        assert_eq!(fqdn_consistent("DB01", "db01.example.com"), Some(false));
    }

    #[test]
    fn fqdn_prefix_check_has_no_label_boundary() {
        assert_eq!(fqdn_consistent("db1", "db10.example.com"), Some(true));
    }
}
