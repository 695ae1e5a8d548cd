//! Owner field parsing: first email-like substring plus first parenthesized
//! team name. Free-form values like
//! `"Jane Doe (Platform) <jane@corp.example.com>"` are common in exports.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("email regex"));

static TEAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("team regex"));

/// Extract `(email, team)` from a raw owner string. Either, both, or
/// neither may be present; an empty input skips parsing entirely.
pub fn parse_owner(raw: &str) -> (Option<String>, Option<String>) {
    if raw.is_empty() {
        return (None, None);
    }
    let email = EMAIL_REGEX
        .find(raw)
        .map(|found| found.as_str().to_string());
    let team = TEAM_REGEX
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str().to_string());
    (email, team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_and_team_extract_together() {
        let (email, team) = parse_owner("Jane Doe (Platform) <jane@corp.example.com>");
        assert_eq!(email.as_deref(), Some("jane@corp.example.com"));
        assert_eq!(team.as_deref(), Some("Platform"));
    }

    #[test]
    fn email_only() {
        let (email, team) = parse_owner("bob@example.net");
        assert_eq!(email.as_deref(), Some("bob@example.net"));
        assert!(team.is_none());
    }

    #[test]
    fn team_only() {
        let (email, team) = parse_owner("Facilities (Ops)");
        assert!(email.is_none());
        assert_eq!(team.as_deref(), Some("Ops"));
    }

    #[test]
    fn neither_found() {
        let (email, team) = parse_owner("John Smith");
        assert!(email.is_none());
        assert!(team.is_none());
    }

    #[test]
    fn empty_input_skips_parsing() {
        assert_eq!(parse_owner(""), (None, None));
    }

    #[test]
    fn first_match_wins() {
        let (email, team) = parse_owner("a@x.com b@y.com (One) (Two)");
        assert_eq!(email.as_deref(), Some("a@x.com"));
        assert_eq!(team.as_deref(), Some("One"));
    }
}
