//! Prompt templates for the consensus flow

use crate::TaskContext;
use crate::consensus::round::Suggestion;
use crate::plan::report::UpdateItem;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// User prompt for a generator profile: task, serialized context, and
    /// the expected response shape.
    pub fn generator_prompt(task: &str, context: &TaskContext) -> String {
        format!(
            r#"Task: {task}{context}

Please provide:
1. A detailed suggestion/solution
2. Your reasoning for this approach
3. A confidence score (0.0 to 1.0)

Format your response as JSON:
{{
    "suggestion": "your detailed suggestion here",
    "reasoning": "why this is a good approach",
    "confidence": 0.85
}}"#,
            task = task,
            context = Self::format_context(context),
        )
    }

    /// User prompt for the judge: task, serialized context, and a formatted
    /// listing of every suggestion.
    pub fn judge_prompt(task: &str, suggestions: &[Suggestion], context: &TaskContext) -> String {
        let listing = suggestions
            .iter()
            .map(|s| {
                format!(
                    "**Suggestion from {}:**\nSuggestion: {}\nReasoning: {}\nConfidence: {}",
                    s.agent_name, s.suggestion, s.reasoning, s.confidence
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"Task: {task}{context}

Evaluate the following suggestions and select the best one:

{listing}

Provide your decision as JSON:
{{
    "selected_agent": "name of the agent with best suggestion",
    "reasoning": "why this suggestion is the best",
    "suggestion": "the selected suggestion (can be modified/combined)"
}}"#,
            task = task,
            context = Self::format_context(context),
            listing = listing,
        )
    }

    /// Task text for a dependency update round.
    ///
    /// The opening sentence carries the trigger phrase that routes the round
    /// to the update-specialized profile set, and the response format embeds
    /// the `UPDATE_PLAN:` block the aggregator extracts afterwards.
    pub fn update_task(item: &UpdateItem) -> String {
        format!(
            r#"You are updating the dependency '{package}' from {old} to {new}.

Your task is to create an update strategy that:

1. Determines the exact version specification to use in pyproject.toml
2. Identifies any breaking API changes between versions
3. Lists ONLY the minimal code changes required for API compatibility
4. Provides specific file paths and change descriptions

CRITICAL REQUIREMENTS:
- Make ONLY changes required for API compatibility
- Do NOT refactor or improve existing code
- Do NOT add new features or complexity
- Do NOT change code style or formatting
- Be extremely conservative with changes

RESPONSE FORMAT (required):

Your response MUST include this structured section at the END:

UPDATE_PLAN:
{{
    "version_spec": ">={new}",
    "breaking_changes": [
        "Description of breaking change 1",
        "Description of breaking change 2"
    ],
    "code_changes": [
        {{
            "file": "src/module/file.py",
            "line_range": "45-50",
            "description": "Replace deprecated method X with Y",
            "reason": "Method X was removed in version {new}"
        }}
    ]
}}

If NO breaking changes or code changes are needed, use empty arrays:
"breaking_changes": [], "code_changes": []

Provide this JSON block AFTER your explanation."#,
            package = item.package,
            old = item.old_version,
            new = item.new_version,
        )
    }

    /// Summary of the other items in a batch, so each per-item judge can
    /// reason about cross-package interaction without scanning the whole
    /// batch. Names at most five packages; the remainder becomes a count.
    ///
    /// Returns an empty string when the item is alone in its batch.
    pub fn batch_peer_summary(items: &[UpdateItem], current: usize) -> String {
        const NAMED_LIMIT: usize = 5;

        let others: Vec<String> = items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != current)
            .map(|(_, item)| {
                format!(
                    "{} ({} -> {})",
                    item.package, item.old_version, item.new_version
                )
            })
            .collect();

        if others.is_empty() {
            return String::new();
        }

        let mut summary = others[..others.len().min(NAMED_LIMIT)].join(", ");
        if others.len() > NAMED_LIMIT {
            summary.push_str(&format!(" and {} more", others.len() - NAMED_LIMIT));
        }
        summary
    }

    fn format_context(context: &TaskContext) -> String {
        if context.is_empty() {
            return String::new();
        }

        let json = serde_json::to_string_pretty(&serde_json::Value::Object(context.clone()))
            .unwrap_or_default();
        format!("\n\nContext:\n{json}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with(key: &str, value: &str) -> TaskContext {
        let mut context = TaskContext::new();
        context.insert(key.to_string(), serde_json::json!(value));
        context
    }

    #[test]
    fn test_generator_prompt_embeds_task_and_context() {
        let prompt = PromptTemplate::generator_prompt(
            "Add pytest to the dev environment",
            &context_with("project_root", "/work/app"),
        );
        assert!(prompt.contains("Add pytest"));
        assert!(prompt.contains("Context:"));
        assert!(prompt.contains("/work/app"));
        assert!(prompt.contains("\"confidence\""));
    }

    #[test]
    fn test_empty_context_is_omitted() {
        let prompt = PromptTemplate::generator_prompt("Do the thing", &TaskContext::new());
        assert!(!prompt.contains("Context:"));
    }

    #[test]
    fn test_judge_prompt_lists_all_suggestions() {
        let suggestions = vec![
            Suggestion::new("A", "first idea", "because", 0.8),
            Suggestion::new("B", "second idea", "why not", 0.6),
        ];
        let prompt = PromptTemplate::judge_prompt("Pick one", &suggestions, &TaskContext::new());
        assert!(prompt.contains("Suggestion from A"));
        assert!(prompt.contains("second idea"));
        assert!(prompt.contains("selected_agent"));
    }

    #[test]
    fn test_update_task_carries_trigger_and_label() {
        let task = PromptTemplate::update_task(&UpdateItem::new("requests", "2.28.0", "2.31.0"));
        assert!(crate::consensus::profile::is_update_task(&task));
        assert!(task.contains("UPDATE_PLAN:"));
        assert!(task.contains("'requests' from 2.28.0 to 2.31.0"));
    }

    #[test]
    fn test_batch_peer_summary_caps_named_packages() {
        let items: Vec<UpdateItem> = (0..8)
            .map(|i| UpdateItem::new(format!("pkg{i}"), "1.0", "2.0"))
            .collect();

        let summary = PromptTemplate::batch_peer_summary(&items, 0);
        assert!(summary.contains("pkg1 (1.0 -> 2.0)"));
        assert!(summary.contains("pkg5"));
        assert!(!summary.contains("pkg6"));
        assert!(summary.ends_with("and 2 more"));
    }

    #[test]
    fn test_batch_peer_summary_single_item_is_empty() {
        let items = vec![UpdateItem::new("requests", "2.28.0", "2.31.0")];
        assert_eq!(PromptTemplate::batch_peer_summary(&items, 0), "");
    }

    #[test]
    fn test_batch_peer_summary_excludes_current() {
        let items = vec![
            UpdateItem::new("requests", "2.28.0", "2.31.0"),
            UpdateItem::new("django", "3.2.0", "4.0.0"),
        ];
        let summary = PromptTemplate::batch_peer_summary(&items, 1);
        assert!(summary.contains("requests"));
        assert!(!summary.contains("django"));
    }
}
