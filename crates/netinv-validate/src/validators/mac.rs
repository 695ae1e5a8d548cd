//! MAC address normalization to canonical colon-separated octet pairs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacReason {
    Ok,
    Missing,
    InvalidFormat,
}

impl MacReason {
    pub fn label(self) -> &'static str {
        match self {
            MacReason::Ok => "ok",
            MacReason::Missing => "missing",
            MacReason::InvalidFormat => "invalid_format",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacValidation {
    pub valid: bool,
    /// Canonical `AA:BB:CC:DD:EE:FF` on success, the trimmed raw value on
    /// format failure, None when missing.
    pub normalized: Option<String>,
    pub reason: MacReason,
}

/// Strip the common separators, uppercase, and require exactly twelve hex
/// characters. Accepts colon, hyphen, and Cisco dotted notations.
pub fn validate_mac(raw: &str) -> MacValidation {
    if raw.is_empty() {
        return MacValidation {
            valid: false,
            normalized: None,
            reason: MacReason::Missing,
        };
    }

    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, ':' | '-' | '.'))
        .collect::<String>()
        .to_ascii_uppercase();

    if cleaned.len() == 12 && cleaned.bytes().all(|b| b.is_ascii_hexdigit()) {
        let pairs: Vec<&str> = (0..6).map(|i| &cleaned[i * 2..i * 2 + 2]).collect();
        MacValidation {
            valid: true,
            normalized: Some(pairs.join(":")),
            reason: MacReason::Ok,
        }
    } else {
        MacValidation {
            valid: false,
            normalized: Some(raw.trim().to_string()),
            reason: MacReason::InvalidFormat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_lowercase_normalizes() {
        let result = validate_mac("aa-bb-cc-00-11-22");
        assert!(result.valid);
        assert_eq!(result.normalized.as_deref(), Some("AA:BB:CC:00:11:22"));
    }

    #[test]
    fn cisco_dotted_form_normalizes() {
        let result = validate_mac("aabb.cc00.1122");
        assert!(result.valid);
        assert_eq!(result.normalized.as_deref(), Some("AA:BB:CC:00:11:22"));
    }

    #[test]
    fn canonical_form_round_trips() {
        let result = validate_mac("AA:BB:CC:00:11:22");
        assert!(result.valid);
        assert_eq!(result.normalized.as_deref(), Some("AA:BB:CC:00:11:22"));
    }

    #[test]
    fn short_value_is_invalid_format() {
        let result = validate_mac("aa:bb:cc");
        assert!(!result.valid);
        assert_eq!(result.reason, MacReason::InvalidFormat);
        assert_eq!(result.normalized.as_deref(), Some("aa:bb:cc"));
    }

    #[test]
    fn non_hex_is_invalid_format() {
        let result = validate_mac("gg:bb:cc:00:11:22");
        assert_eq!(result.reason, MacReason::InvalidFormat);
    }

    #[test]
    fn empty_is_missing_with_no_value() {
        let result = validate_mac("");
        assert_eq!(result.reason, MacReason::Missing);
        assert!(result.normalized.is_none());
    }
}
