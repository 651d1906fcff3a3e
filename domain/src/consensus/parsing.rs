//! Response parsing for generator and judge output.
//!
//! Providers return either free text or an already-structured mapping
//! (native structured output). Both arrive here as a [`RawResponse`] and
//! leave as typed values. These functions are total: any input, including
//! empty strings and non-JSON garbage, resolves to a populated value via
//! documented defaults.
//!
//! | Function | Fallback |
//! |----------|----------|
//! | [`parse_suggestion`] | whole text as suggestion, confidence 0.5 |
//! | [`parse_decision`] | first suggestion, raw text as reasoning |

use serde_json::{Map, Value};

use super::round::{Decision, Suggestion};

/// Raw provider output: free text or an already-structured mapping.
#[derive(Debug, Clone)]
pub enum RawResponse {
    Text(String),
    Structured(Map<String, Value>),
}

impl From<&str> for RawResponse {
    fn from(text: &str) -> Self {
        RawResponse::Text(text.to_string())
    }
}

impl From<String> for RawResponse {
    fn from(text: String) -> Self {
        RawResponse::Text(text)
    }
}

impl From<Map<String, Value>> for RawResponse {
    fn from(map: Map<String, Value>) -> Self {
        RawResponse::Structured(map)
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

/// Parse a generator response into a [`Suggestion`].
///
/// - Structured mapping: read `suggestion` / `reasoning` / `confidence`
///   with defaults `""` / `""` / `0.7`.
/// - Text: the whole string is expected to be one JSON object; on success
///   its fields are used (a missing `suggestion` falls back to the full
///   text), otherwise the entire text becomes the suggestion with
///   confidence `0.5`.
///
/// Confidence is clamped into `[0, 1]`.
pub fn parse_suggestion(agent_name: &str, raw: &RawResponse) -> Suggestion {
    match raw {
        RawResponse::Structured(map) => Suggestion::new(
            agent_name,
            string_field(map, "suggestion").unwrap_or_default(),
            string_field(map, "reasoning").unwrap_or_default(),
            number_field(map, "confidence").unwrap_or(0.7),
        ),
        RawResponse::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Suggestion::new(
                agent_name,
                string_field(&map, "suggestion").unwrap_or_else(|| text.clone()),
                string_field(&map, "reasoning").unwrap_or_default(),
                number_field(&map, "confidence").unwrap_or(0.7),
            ),
            _ => Suggestion::new(agent_name, text.clone(), "", 0.5),
        },
    }
}

/// Parse the judge's response into a [`Decision`].
///
/// `selected_agent` is resolved against `suggestions` by exact name match.
/// When the name matches no suggestion, or the response cannot be parsed at
/// all, the decision defaults to the first suggestion; for unparseable text
/// the raw text becomes the reasoning.
///
/// Returns `None` only when `suggestions` is empty — a round always has at
/// least one generator, so callers treat that as a structural error.
pub fn parse_decision(raw: &RawResponse, suggestions: &[Suggestion]) -> Option<Decision> {
    let first = suggestions.first()?;

    let decision = match raw {
        RawResponse::Structured(map) => decision_from_map(map, suggestions, first),
        RawResponse::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => decision_from_map(&map, suggestions, first),
            _ => Decision {
                agent_name: first.agent_name.clone(),
                suggestion: first.suggestion.clone(),
                reasoning: text.clone(),
            },
        },
    };

    Some(decision)
}

fn decision_from_map(
    map: &Map<String, Value>,
    suggestions: &[Suggestion],
    first: &Suggestion,
) -> Decision {
    let selected = string_field(map, "selected_agent")
        .and_then(|name| suggestions.iter().find(|s| s.agent_name == name))
        .unwrap_or(first);

    Decision {
        agent_name: selected.agent_name.clone(),
        suggestion: string_field(map, "suggestion").unwrap_or_else(|| selected.suggestion.clone()),
        reasoning: string_field(map, "reasoning").unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_suggestions() -> Vec<Suggestion> {
        vec![
            Suggestion::new("ConfigurationSpecialist", "pin the version", "stable", 0.8),
            Suggestion::new("WorkflowSpecialist", "add a sync script", "repeatable", 0.6),
        ]
    }

    // ==================== parse_suggestion Tests ====================

    #[test]
    fn test_suggestion_from_json_text() {
        let raw = RawResponse::from(
            r#"{"suggestion": "use >=2.30", "reasoning": "latest stable", "confidence": 0.9}"#,
        );
        let s = parse_suggestion("ConfigurationSpecialist", &raw);
        assert_eq!(s.agent_name, "ConfigurationSpecialist");
        assert_eq!(s.suggestion, "use >=2.30");
        assert_eq!(s.reasoning, "latest stable");
        assert_eq!(s.confidence, 0.9);
    }

    #[test]
    fn test_suggestion_from_plain_text_falls_back() {
        let raw = RawResponse::from("Just pin requests to 2.30, trust me.");
        let s = parse_suggestion("WorkflowSpecialist", &raw);
        assert_eq!(s.suggestion, "Just pin requests to 2.30, trust me.");
        assert_eq!(s.reasoning, "");
        assert_eq!(s.confidence, 0.5);
    }

    #[test]
    fn test_suggestion_never_fails_on_garbage() {
        for input in ["", "{broken", "[1, 2, 3]", "null", "42"] {
            let s = parse_suggestion("X", &RawResponse::from(input));
            assert_eq!(s.agent_name, "X");
            assert_eq!(s.suggestion, input);
            assert_eq!(s.confidence, 0.5);
        }
    }

    #[test]
    fn test_suggestion_json_missing_fields_gets_defaults() {
        let raw = RawResponse::from(r#"{"suggestion": "do it"}"#);
        let s = parse_suggestion("X", &raw);
        assert_eq!(s.suggestion, "do it");
        assert_eq!(s.reasoning, "");
        assert_eq!(s.confidence, 0.7);
    }

    #[test]
    fn test_suggestion_from_structured_map() {
        let mut map = Map::new();
        map.insert("suggestion".into(), "bump minor only".into());
        map.insert("confidence".into(), serde_json::json!(1.4));
        let s = parse_suggestion("X", &RawResponse::from(map));
        assert_eq!(s.suggestion, "bump minor only");
        assert_eq!(s.reasoning, "");
        // Out-of-range confidence is clamped
        assert_eq!(s.confidence, 1.0);
    }

    #[test]
    fn test_suggestion_structured_map_empty() {
        let s = parse_suggestion("X", &RawResponse::from(Map::new()));
        assert_eq!(s.suggestion, "");
        assert_eq!(s.confidence, 0.7);
    }

    // ==================== parse_decision Tests ====================

    #[test]
    fn test_decision_exact_name_match() {
        let suggestions = sample_suggestions();
        let raw = RawResponse::from(
            r#"{"selected_agent": "WorkflowSpecialist", "reasoning": "more practical",
                "suggestion": "add a sync script with checks"}"#,
        );
        let d = parse_decision(&raw, &suggestions).unwrap();
        assert_eq!(d.agent_name, "WorkflowSpecialist");
        assert_eq!(d.suggestion, "add a sync script with checks");
        assert_eq!(d.reasoning, "more practical");
    }

    #[test]
    fn test_decision_unknown_name_falls_back_to_first() {
        let suggestions = sample_suggestions();
        let raw = RawResponse::from(r#"{"selected_agent": "SomeoneElse"}"#);
        let d = parse_decision(&raw, &suggestions).unwrap();
        assert_eq!(d.agent_name, "ConfigurationSpecialist");
        assert_eq!(d.suggestion, "pin the version");
    }

    #[test]
    fn test_decision_unparseable_text_keeps_raw_as_reasoning() {
        let suggestions = sample_suggestions();
        let raw = RawResponse::from("I like the first one best.");
        let d = parse_decision(&raw, &suggestions).unwrap();
        assert_eq!(d.agent_name, "ConfigurationSpecialist");
        assert_eq!(d.suggestion, "pin the version");
        assert_eq!(d.reasoning, "I like the first one best.");
    }

    #[test]
    fn test_decision_missing_suggestion_uses_selected() {
        let suggestions = sample_suggestions();
        let raw =
            RawResponse::from(r#"{"selected_agent": "WorkflowSpecialist", "reasoning": "ok"}"#);
        let d = parse_decision(&raw, &suggestions).unwrap();
        assert_eq!(d.suggestion, "add a sync script");
    }

    #[test]
    fn test_decision_always_references_known_agent() {
        let suggestions = sample_suggestions();
        let names: Vec<&str> = suggestions.iter().map(|s| s.agent_name.as_str()).collect();

        for input in [
            r#"{"selected_agent": "Nobody"}"#,
            "prose only",
            "",
            r#"{"reasoning": "no selection at all"}"#,
            "[]",
        ] {
            let d = parse_decision(&RawResponse::from(input), &suggestions).unwrap();
            assert!(names.contains(&d.agent_name.as_str()), "input: {input:?}");
        }
    }

    #[test]
    fn test_decision_empty_suggestions_is_none() {
        assert!(parse_decision(&RawResponse::from("anything"), &[]).is_none());
    }
}
