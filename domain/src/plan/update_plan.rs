//! Structured update plans extracted from judged suggestions.
//!
//! Generators working on dependency updates are instructed to end their
//! response with an `UPDATE_PLAN:` block containing a JSON object. This
//! module maps that object onto typed values, defaulting every missing
//! field — a code change without a `file` is kept with an empty path rather
//! than rejected.

use serde::{Deserialize, Serialize};

use crate::consensus::extract::extract_labeled_json;

/// Sentinel label preceding the embedded update plan object.
pub const UPDATE_PLAN_LABEL: &str = "UPDATE_PLAN:";

/// One proposed code modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeChange {
    /// Path of the file to change, relative to the project root
    #[serde(default)]
    pub file: String,
    /// Line range within the file (e.g. "45-50")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_range: Option<String>,
    /// What to change
    #[serde(default)]
    pub description: String,
    /// Why the change is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Package whose update motivated this change (set during aggregation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// All distinct packages that proposed a change at this location.
    /// Populated only when deduplication merges proposals from more than
    /// one package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<String>>,
}

/// Machine-readable plan embedded in an update suggestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlan {
    /// Version specification to use (e.g. ">=2.30.0")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_spec: Option<String>,
    /// Human-readable breaking change descriptions
    #[serde(default)]
    pub breaking_changes: Vec<String>,
    /// Minimal code changes required for API compatibility
    #[serde(default)]
    pub code_changes: Vec<CodeChange>,
}

impl UpdatePlan {
    /// Extract the plan from a suggestion's text.
    ///
    /// Returns `None` when no `UPDATE_PLAN:` block is present or the block
    /// does not parse — the expected case for suggestions that offered no
    /// structured data.
    pub fn from_suggestion(suggestion: &str) -> Option<Self> {
        let value = extract_labeled_json(suggestion, UPDATE_PLAN_LABEL)?;
        serde_json::from_value(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_extracted_from_prose() {
        let suggestion = r#"The upgrade is mostly safe. One rename is required.

UPDATE_PLAN:
{
    "version_spec": ">=2.31.0",
    "breaking_changes": ["Session.request dropped the `verify` kwarg default"],
    "code_changes": [
        {
            "file": "src/client.py",
            "line_range": "10-12",
            "description": "Pass verify=True explicitly",
            "reason": "Default changed in 2.31"
        }
    ]
}"#;

        let plan = UpdatePlan::from_suggestion(suggestion).unwrap();
        assert_eq!(plan.version_spec.as_deref(), Some(">=2.31.0"));
        assert_eq!(plan.breaking_changes.len(), 1);
        assert_eq!(plan.code_changes[0].file, "src/client.py");
        assert_eq!(plan.code_changes[0].line_range.as_deref(), Some("10-12"));
    }

    #[test]
    fn test_no_label_yields_none() {
        assert!(UpdatePlan::from_suggestion("looks fine, ship it").is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let suggestion = r#"UPDATE_PLAN: {"code_changes": [{"description": "tweak import"}]}"#;
        let plan = UpdatePlan::from_suggestion(suggestion).unwrap();
        assert!(plan.version_spec.is_none());
        assert!(plan.breaking_changes.is_empty());
        // A change without a file is kept with an empty path
        assert_eq!(plan.code_changes[0].file, "");
        assert!(plan.code_changes[0].line_range.is_none());
    }

    #[test]
    fn test_empty_arrays_parse() {
        let suggestion = r#"UPDATE_PLAN: {"breaking_changes": [], "code_changes": []}"#;
        let plan = UpdatePlan::from_suggestion(suggestion).unwrap();
        assert!(plan.breaking_changes.is_empty());
        assert!(plan.code_changes.is_empty());
    }

    #[test]
    fn test_malformed_block_yields_none() {
        assert!(UpdatePlan::from_suggestion("UPDATE_PLAN: {oops").is_none());
        // Wrong shape for a known field
        assert!(
            UpdatePlan::from_suggestion(r#"UPDATE_PLAN: {"breaking_changes": "not a list"}"#)
                .is_none()
        );
    }
}
