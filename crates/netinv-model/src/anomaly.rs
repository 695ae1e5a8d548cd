use serde::{Deserialize, Serialize};

/// A single issue inside an anomaly: which field, what went wrong, and the
/// offending value. Duplicate-value issues additionally carry the full set
/// of conflicting record ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyIssue {
    pub field: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicated_in_rows: Option<Vec<String>>,
}

impl AnomalyIssue {
    pub fn new(
        field: impl Into<String>,
        issue_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            issue_type: issue_type.into(),
            value: value.into(),
            duplicated_in_rows: None,
        }
    }

    #[must_use]
    pub fn with_duplicates(mut self, rows: Vec<String>) -> Self {
        self.duplicated_in_rows = Some(rows);
        self
    }
}

/// Anomaly report entry for one source record.
///
/// During processing each raise produces a single-issue anomaly; the final
/// grouping pass merges them so the report holds at most one `Anomaly` per
/// `source_row_id`, its issues concatenated in raise order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    pub source_row_id: String,
    pub issues: Vec<AnomalyIssue>,
    pub recommended_actions: Vec<String>,
}

impl Anomaly {
    /// Single-issue anomaly, the shape produced by every per-record raise.
    pub fn single(
        source_row_id: impl Into<String>,
        issue: AnomalyIssue,
        action: impl Into<String>,
    ) -> Self {
        Self {
            source_row_id: source_row_id.into(),
            issues: vec![issue],
            recommended_actions: vec![action.into()],
        }
    }

    /// Absorb another anomaly for the same record. Recommended actions are
    /// concatenated as-is, never deduplicated.
    pub fn merge(&mut self, other: Anomaly) {
        self.issues.extend(other.issues);
        self.recommended_actions.extend(other.recommended_actions);
    }
}
