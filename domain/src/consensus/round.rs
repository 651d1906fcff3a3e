//! Consensus round value objects - immutable results of a generate-then-judge cycle.
//!
//! - [`Suggestion`] - One generator profile's proposed solution
//! - [`Decision`] - The judge's selection (or merge) of the best suggestion
//! - [`RoundResult`] - Complete outcome of a round, including all suggestions

use serde::{Deserialize, Serialize};

/// A suggestion produced by a single generator profile.
///
/// Produced once per profile per round; read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Name of the profile that produced this suggestion
    pub agent_name: String,
    /// The proposed solution text
    pub suggestion: String,
    /// Why the generator believes this is a good approach
    pub reasoning: String,
    /// Self-reported confidence in `[0, 1]`; always populated — parsing
    /// substitutes a default when the generator offers none
    pub confidence: f64,
}

impl Suggestion {
    pub fn new(
        agent_name: impl Into<String>,
        suggestion: impl Into<String>,
        reasoning: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            suggestion: suggestion.into(),
            reasoning: reasoning.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// The judge's decision for one round.
///
/// `agent_name` always references one of the round's suggestions; when the
/// judge's choice matches no known name, parsing falls back to the first
/// suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// Name of the winning generator profile
    pub agent_name: String,
    /// The selected suggestion (possibly modified or combined by the judge)
    pub suggestion: String,
    /// The judge's rationale for the selection
    pub reasoning: String,
}

/// Complete outcome of a consensus round.
///
/// A failed round is a first-class value rather than an error: callers read
/// `success` and `error`, and batch processing converts failed rounds into
/// `failed_packages` entries without aborting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResult {
    /// Whether the round completed
    pub success: bool,
    /// Name of the winning generator profile
    pub selected_agent: String,
    /// The selected suggestion text
    pub selected_suggestion: String,
    /// The judge's rationale
    pub reasoning: String,
    /// Every generator's suggestion, in profile order, for transparency
    pub suggestions: Vec<Suggestion>,
    /// Error message when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RoundResult {
    /// Build a successful result from the judge's decision and the full
    /// suggestion list.
    pub fn from_decision(decision: Decision, suggestions: Vec<Suggestion>) -> Self {
        Self {
            success: true,
            selected_agent: decision.agent_name,
            selected_suggestion: decision.suggestion,
            reasoning: decision.reasoning,
            suggestions,
            error: None,
        }
    }

    /// Build a failed result. No partial suggestions are surfaced.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            selected_agent: String::new(),
            selected_suggestion: String::new(),
            reasoning: String::new(),
            suggestions: Vec::new(),
            error: Some(message.into()),
        }
    }
}
