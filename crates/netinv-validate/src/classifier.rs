//! Rule-based device classification over device-type text and free-form
//! notes. A per-record override table supersedes keyword matching entirely.

use netinv_model::PipelineConfig;

/// Label emitted when neither the device-type field nor the notes carry any
/// usable text.
pub const UNKNOWN_DEVICE_TYPE: &str = "unknown";

/// How a classification was produced; drives the step label recorded by the
/// record processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    /// Authoritative per-record override.
    Override,
    /// Keyword match against the ordered category table.
    Keyword,
    /// No keyword matched; the raw device-type text passed through.
    Passthrough,
    /// No keyword matched and there was no text to classify.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub device_type: String,
    pub confidence: f64,
    pub needs_review: bool,
    pub source: ClassificationSource,
}

/// Classify a device from its type text and notes.
///
/// The ordered category table wins on the first category with any keyword
/// present in the case-folded `device_type + notes` context string
/// (confidence 0.9). With no match, empty inputs classify as
/// [`UNKNOWN_DEVICE_TYPE`] (confidence 0.1) and non-empty input passes
/// through unchanged (confidence 0.3), both flagged for review.
pub fn classify_device(
    source_row_id: &str,
    device_type: &str,
    notes: &str,
    config: &PipelineConfig,
) -> Classification {
    if let Some(override_entry) = config.device_overrides.get(source_row_id) {
        return Classification {
            device_type: override_entry.device_type.clone(),
            confidence: override_entry.confidence,
            needs_review: false,
            source: ClassificationSource::Override,
        };
    }

    let device_type = device_type.trim();
    let notes = notes.trim();
    let context = format!("{device_type} {notes}").to_lowercase();

    for category in &config.device_keywords {
        if category.matches(&context) {
            return Classification {
                device_type: category.category.clone(),
                confidence: 0.9,
                needs_review: false,
                source: ClassificationSource::Keyword,
            };
        }
    }

    if device_type.is_empty() && notes.is_empty() {
        Classification {
            device_type: UNKNOWN_DEVICE_TYPE.to_string(),
            confidence: 0.1,
            needs_review: true,
            source: ClassificationSource::Unresolved,
        }
    } else {
        Classification {
            device_type: device_type.to_string(),
            confidence: 0.3,
            needs_review: true,
            source: ClassificationSource::Passthrough,
        }
    }
}

/// Derive a device type from hostname keywords: first matching category
/// only. Independent of the classifier table; hostname abbreviations
/// ("srv", "rtr", "fw") live here.
pub fn infer_type_from_hostname(hostname: &str, config: &PipelineConfig) -> Option<String> {
    if hostname.is_empty() {
        return None;
    }
    let folded = hostname.to_lowercase();
    config
        .hostname_keywords
        .iter()
        .find(|category| category.matches(&folded))
        .map(|category| category.category.clone())
}
