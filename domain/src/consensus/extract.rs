//! Labeled JSON block extraction.
//!
//! Generators are asked to embed a machine-readable JSON object inside an
//! otherwise free-text response, behind a sentinel label such as
//! `UPDATE_PLAN:`. This module recovers that object.
//!
//! The contract is label-parametric on purpose: plan labels, fix labels, and
//! migration labels all share this one function instead of duplicating
//! per-label scanning logic.

use serde_json::Value;

/// Extract the JSON object following the first occurrence of `label`.
///
/// Scans the text after the label for the first `{` and the last `}` and
/// parses the substring between them. Prose before the label and after the
/// closing brace is ignored.
///
/// Returns `None` when the label does not occur, when either brace is
/// missing, or when the substring is not valid JSON. A missing block is the
/// expected "no structured data offered" case, not an error.
///
/// # Examples
///
/// ```
/// use concord_domain::extract_labeled_json;
///
/// let text = r#"Here is my plan.
///
/// UPDATE_PLAN:
/// {"version_spec": ">=2.0", "breaking_changes": []}
///
/// Let me know if anything is unclear."#;
///
/// let plan = extract_labeled_json(text, "UPDATE_PLAN:").unwrap();
/// assert_eq!(plan["version_spec"], ">=2.0");
///
/// assert!(extract_labeled_json("no block here", "UPDATE_PLAN:").is_none());
/// ```
pub fn extract_labeled_json(text: &str, label: &str) -> Option<Value> {
    let (_, rest) = text.split_once(label)?;

    let start = rest.find('{')?;
    let end = rest.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str(&rest[start..=end]).ok()
}
