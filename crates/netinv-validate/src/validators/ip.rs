//! IP address validation and canonicalization.
//!
//! IPv4 candidates are canonicalized octet-by-octet so decimal variants with
//! leading zeros ("010.000.000.001") normalize to the plain dotted form
//! rather than being rejected or read as octal. IPv6 candidates normalize to
//! the fully expanded zero-padded form.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Why an IP value failed validation. `Unparseable` carries the parser's
/// own message for IPv6 inputs the address parser rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpReason {
    Ok,
    Missing,
    MixedNotation,
    WrongPartCount,
    NonNumeric,
    OctetOutOfRange,
    InvalidFormat,
    Unparseable(String),
}

impl IpReason {
    /// Reason code as it appears in anomaly issues and step labels.
    pub fn label(&self) -> &str {
        match self {
            IpReason::Ok => "ok",
            IpReason::Missing => "missing",
            IpReason::MixedNotation => "mixed_notation",
            IpReason::WrongPartCount => "wrong_part_count",
            IpReason::NonNumeric => "non_numeric",
            IpReason::OctetOutOfRange => "octet_out_of_range",
            IpReason::InvalidFormat => "invalid_format",
            IpReason::Unparseable(message) => message,
        }
    }
}

/// Structured result of validating one raw IP field.
#[derive(Debug, Clone, PartialEq)]
pub struct IpValidation {
    pub valid: bool,
    /// Canonical form on success, the original value otherwise.
    pub normalized: Option<String>,
    pub version: Option<u8>,
    /// `Some("")` for valid addresses with no derivable private /24.
    pub subnet_cidr: Option<String>,
    pub reverse_ptr: Option<String>,
    pub reason: IpReason,
}

impl IpValidation {
    fn invalid(original: &str, reason: IpReason) -> Self {
        Self {
            valid: false,
            normalized: if original.is_empty() {
                None
            } else {
                Some(original.to_string())
            },
            version: None,
            subnet_cidr: None,
            reverse_ptr: None,
            reason,
        }
    }
}

/// Validate and normalize a raw IP string, IPv4 or IPv6.
///
/// Total: always returns a structured result. An empty value is `missing`;
/// anything containing a colon is treated as an IPv6 candidate (zone-id
/// suffixes after `%` are stripped before parsing), everything else as IPv4.
pub fn validate_ip(raw: &str) -> IpValidation {
    if raw.is_empty() {
        return IpValidation::invalid(raw, IpReason::Missing);
    }
    let trimmed = raw.trim();

    if trimmed.contains(':') {
        return validate_ipv6_candidate(trimmed);
    }
    validate_ipv4_candidate(trimmed)
}

fn validate_ipv6_candidate(original: &str) -> IpValidation {
    // Zone ids ("fe80::1%eth0") are interface-local; drop them for parsing
    // but report the original string on failure.
    let candidate = original.split('%').next().unwrap_or(original);
    match candidate.parse::<IpAddr>() {
        Ok(IpAddr::V6(address)) => {
            let expanded = expand_ipv6(address);
            IpValidation {
                valid: true,
                normalized: Some(expanded.clone()),
                version: Some(6),
                subnet_cidr: Some(String::new()),
                reverse_ptr: Some(ipv6_reverse_pointer(&expanded)),
                reason: IpReason::Ok,
            }
        }
        Ok(IpAddr::V4(_)) => IpValidation::invalid(original, IpReason::MixedNotation),
        Err(error) => IpValidation::invalid(original, IpReason::Unparseable(error.to_string())),
    }
}

fn validate_ipv4_candidate(original: &str) -> IpValidation {
    let parts: Vec<&str> = original.split('.').collect();
    if parts.len() != 4 {
        return IpValidation::invalid(original, IpReason::WrongPartCount);
    }

    let mut canonical_parts = Vec::with_capacity(4);
    for part in &parts {
        if !is_decimal_part(part) {
            return IpValidation::invalid(original, IpReason::NonNumeric);
        }
        // Negative values and digit runs too long for i64 both land here.
        let value = match part.parse::<i64>() {
            Ok(value) if (0..=255).contains(&value) => value,
            _ => return IpValidation::invalid(original, IpReason::OctetOutOfRange),
        };
        canonical_parts.push(value.to_string());
    }

    let normalized = canonical_parts.join(".");
    let Ok(address) = normalized.parse::<Ipv4Addr>() else {
        return IpValidation::invalid(original, IpReason::InvalidFormat);
    };

    let octets = address.octets();
    let subnet_cidr = if address.is_private() {
        format!("{}.{}.{}.0/24", octets[0], octets[1], octets[2])
    } else {
        String::new()
    };
    let reverse_ptr = format!(
        "{}.{}.{}.{}.in-addr.arpa",
        octets[3], octets[2], octets[1], octets[0]
    );

    IpValidation {
        valid: true,
        normalized: Some(normalized),
        version: Some(4),
        subnet_cidr: Some(subnet_cidr),
        reverse_ptr: Some(reverse_ptr),
        reason: IpReason::Ok,
    }
}

/// An octet part counts as decimal if it is all digits, or a minus sign
/// followed by digits. Negative values still fail the range check.
fn is_decimal_part(part: &str) -> bool {
    let digits = part.strip_prefix('-').unwrap_or(part);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Fully expanded textual form: eight zero-padded hex groups, no `::`.
fn expand_ipv6(address: Ipv6Addr) -> String {
    let segments = address.segments();
    let groups: Vec<String> = segments
        .iter()
        .map(|segment| format!("{segment:04x}"))
        .collect();
    groups.join(":")
}

/// Standard `ip6.arpa` name: every nibble of the expanded form, reversed.
fn ipv6_reverse_pointer(expanded: &str) -> String {
    let mut nibbles: Vec<String> = expanded
        .chars()
        .filter(|ch| *ch != ':')
        .map(String::from)
        .collect();
    nibbles.reverse();
    format!("{}.ip6.arpa", nibbles.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_missing() {
        let result = validate_ip("");
        assert!(!result.valid);
        assert_eq!(result.reason, IpReason::Missing);
        assert!(result.normalized.is_none());
    }

    #[test]
    fn leading_zero_octets_canonicalize() {
        let result = validate_ip("010.000.000.001");
        assert!(result.valid);
        assert_eq!(result.normalized.as_deref(), Some("10.0.0.1"));
        assert_eq!(result.version, Some(4));
        assert_eq!(result.subnet_cidr.as_deref(), Some("10.0.0.0/24"));
        assert_eq!(result.reverse_ptr.as_deref(), Some("1.0.0.10.in-addr.arpa"));
    }

    #[test]
    fn octet_out_of_range_keeps_original() {
        let result = validate_ip("10.0.0.999");
        assert!(!result.valid);
        assert_eq!(result.reason, IpReason::OctetOutOfRange);
        assert_eq!(result.normalized.as_deref(), Some("10.0.0.999"));
    }

    #[test]
    fn negative_octet_is_out_of_range_not_non_numeric() {
        let result = validate_ip("10.0.-1.1");
        assert_eq!(result.reason, IpReason::OctetOutOfRange);
    }

    #[test]
    fn alpha_octet_is_non_numeric() {
        let result = validate_ip("10.0.x.1");
        assert_eq!(result.reason, IpReason::NonNumeric);
    }

    #[test]
    fn three_parts_is_wrong_part_count() {
        let result = validate_ip("10.0.1");
        assert_eq!(result.reason, IpReason::WrongPartCount);
    }

    #[test]
    fn public_address_gets_no_subnet() {
        let result = validate_ip("8.8.8.8");
        assert!(result.valid);
        assert_eq!(result.subnet_cidr.as_deref(), Some(""));
    }

    #[test]
    fn loopback_gets_no_subnet() {
        let result = validate_ip("127.0.0.1");
        assert!(result.valid);
        assert_eq!(result.subnet_cidr.as_deref(), Some(""));
    }

    #[test]
    fn ipv6_expands_and_reverses() {
        let result = validate_ip("2001:db8::1");
        assert!(result.valid);
        assert_eq!(
            result.normalized.as_deref(),
            Some("2001:0db8:0000:0000:0000:0000:0000:0001")
        );
        assert_eq!(result.version, Some(6));
        assert_eq!(result.subnet_cidr.as_deref(), Some(""));
        let reverse = result.reverse_ptr.expect("reverse pointer");
        assert!(reverse.starts_with("1.0.0.0."));
        assert!(reverse.ends_with(".8.b.d.0.1.0.0.2.ip6.arpa"));
    }

    #[test]
    fn zone_id_is_stripped_before_parsing() {
        let result = validate_ip("fe80::1%eth0");
        assert!(result.valid);
        assert_eq!(
            result.normalized.as_deref(),
            Some("fe80:0000:0000:0000:0000:0000:0000:0001")
        );
    }

    #[test]
    fn garbage_ipv6_reports_parser_message() {
        let result = validate_ip("не:адрес");
        assert!(!result.valid);
        assert!(matches!(result.reason, IpReason::Unparseable(_)));
        assert_eq!(result.normalized.as_deref(), Some("не:адрес"));
    }
}
