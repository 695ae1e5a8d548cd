//! Property tests for the normalizing validators.

use proptest::prelude::*;

use netinv_validate::{validate_ip, validate_mac};

proptest! {
    /// Any in-range octet quad normalizes to canonical dotted decimal,
    /// regardless of leading zeros.
    #[test]
    fn ipv4_normalization_strips_leading_zeros(
        a in 0u16..=255,
        b in 0u16..=255,
        c in 0u16..=255,
        d in 0u16..=255,
        pad in 0usize..=2,
    ) {
        let raw = format!(
            "{:0width$}.{:0width$}.{:0width$}.{:0width$}",
            a, b, c, d,
            width = pad + 1,
        );
        let result = validate_ip(&raw);
        prop_assert!(result.valid);
        let expected = format!("{a}.{b}.{c}.{d}");
        prop_assert_eq!(result.normalized.as_deref(), Some(expected.as_str()));
    }

    /// Normalization is idempotent: a canonical quad maps to itself.
    #[test]
    fn ipv4_canonical_form_is_fixed_point(
        a in 0u16..=255,
        b in 0u16..=255,
        c in 0u16..=255,
        d in 0u16..=255,
    ) {
        let canonical = format!("{a}.{b}.{c}.{d}");
        let result = validate_ip(&canonical);
        prop_assert!(result.valid);
        prop_assert_eq!(result.normalized.as_deref(), Some(canonical.as_str()));
    }

    /// A MAC already in canonical colon-hex form round-trips unchanged.
    #[test]
    fn canonical_mac_round_trips(bytes in proptest::array::uniform6(0u8..=255)) {
        let canonical = bytes
            .iter()
            .map(|byte| format!("{byte:02X}"))
            .collect::<Vec<_>>()
            .join(":");
        let result = validate_mac(&canonical);
        prop_assert!(result.valid);
        prop_assert_eq!(result.normalized.as_deref(), Some(canonical.as_str()));
    }

    /// Separator style never changes the normalized MAC.
    #[test]
    fn mac_separators_do_not_matter(bytes in proptest::array::uniform6(0u8..=255)) {
        let colon = bytes
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect::<Vec<_>>()
            .join(":");
        let hyphen = colon.replace(':', "-");
        let bare = colon.replace(':', "");
        let expected = validate_mac(&colon).normalized;
        prop_assert_eq!(validate_mac(&hyphen).normalized.clone(), expected.clone());
        prop_assert_eq!(validate_mac(&bare).normalized, expected);
    }
}
