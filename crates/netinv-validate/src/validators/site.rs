//! Site name normalization: trim, lowercase, spaces to hyphens.

pub fn normalize_site(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase().replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_hyphens() {
        assert_eq!(
            normalize_site("  New York DC 1 ").as_deref(),
            Some("new-york-dc-1")
        );
    }

    #[test]
    fn already_normalized_is_unchanged() {
        assert_eq!(normalize_site("ams-dc2").as_deref(), Some("ams-dc2"));
    }

    #[test]
    fn empty_and_whitespace_yield_none() {
        assert!(normalize_site("").is_none());
        assert!(normalize_site("   ").is_none());
    }
}
