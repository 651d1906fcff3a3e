//! Generator and judge profiles.
//!
//! A [`Profile`] is a named role/instruction template asking the
//! text-completion capability to play a specialist. A [`ProfileSet`] bundles
//! the generator pair with the judge used for one round.
//!
//! Profile selection is a pure, content-based strategy: tasks that contain
//! an update trigger phrase get the update-specialized set, everything else
//! gets the general set. No hidden state, no learning.

use serde::{Deserialize, Serialize};

/// Trigger phrases (lowercase) that route a task to the update-specialized
/// profile set.
const UPDATE_TRIGGERS: &[&str] = &["updating the dependency", "update strategy"];

/// A named role/instruction template for one specialist.
///
/// Immutable, constructed per round from fixed templates. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique name within a round (referenced by the judge's decision)
    pub name: String,
    /// Short role description
    pub role: String,
    /// Full instructions for the specialist
    pub instructions: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            instructions: instructions.into(),
        }
    }

    /// System prompt derived from role and instructions.
    pub fn system_prompt(&self) -> String {
        format!("You are a {}.\n\n{}", self.role, self.instructions)
    }
}

/// The ordered generator profiles and the judge used for one round.
///
/// Generator order is significant: suggestions are produced in this order,
/// and the judge's fallback is the *first* suggestion.
#[derive(Debug, Clone)]
pub struct ProfileSet {
    pub generators: Vec<Profile>,
    pub judge: Profile,
}

impl ProfileSet {
    /// General-purpose pair: configuration specialist + workflow specialist.
    pub fn general() -> Self {
        Self {
            generators: vec![
                Profile::new(
                    "ConfigurationSpecialist",
                    "Python project configuration expert",
                    "You are an expert in Python project configuration and dependency \
                     management. Focus on pyproject.toml structure, build systems, and \
                     environment setup. Provide detailed, configuration-focused solutions.",
                ),
                Profile::new(
                    "WorkflowSpecialist",
                    "project workflow and automation expert",
                    "You are an expert in project workflows, scripts, and automation. \
                     Focus on task automation, testing, and development workflows. \
                     Provide practical, workflow-oriented solutions.",
                ),
            ],
            judge: Profile::new(
                "Judge",
                "solution evaluator and selector",
                "You are a judge that evaluates multiple solutions to select the best one. \
                 Consider accuracy, practicality, completeness, and appropriateness for the \
                 context. Provide clear reasoning for your selection.",
            ),
        }
    }

    /// Update-specialized pair: API-compatibility analyst + minimal-migration
    /// specialist, with a judge tuned for conservative upgrade plans.
    pub fn update() -> Self {
        Self {
            generators: vec![
                Profile::new(
                    "ApiCompatibilityAnalyst",
                    "API compatibility analyst",
                    "You are an expert in analyzing breaking API changes between package \
                     versions. Focus on removed or renamed symbols, changed signatures, and \
                     behavioral differences documented in changelogs. Report only changes \
                     that actually affect callers.",
                ),
                Profile::new(
                    "MinimalMigrationSpecialist",
                    "minimal-migration specialist",
                    "You are an expert in migrating code across dependency upgrades with \
                     the smallest possible diff. Propose only the code changes required for \
                     API compatibility. Never suggest refactoring, new features, or style \
                     changes.",
                ),
            ],
            judge: Profile::new(
                "UpdateJudge",
                "upgrade plan evaluator",
                "You are a judge that evaluates dependency update strategies. Prefer the \
                 most conservative plan that keeps the project working: accurate breaking \
                 change analysis and the fewest code changes. Provide clear reasoning for \
                 your selection.",
            ),
        }
    }

    /// Select the profile set for a task via trigger-phrase dispatch.
    pub fn for_task(task: &str) -> Self {
        if is_update_task(task) {
            Self::update()
        } else {
            Self::general()
        }
    }
}

/// Case-insensitive substring match against the update trigger phrases.
///
/// String containment is intentionally preserved for compatibility with the
/// task texts produced by [`crate::PromptTemplate::update_task`].
pub fn is_update_task(task: &str) -> bool {
    let task = task.to_lowercase();
    UPDATE_TRIGGERS.iter().any(|phrase| task.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_phrase_dispatch_table() {
        let cases = [
            ("You are updating the dependency 'requests'", true),
            ("Create an UPDATE STRATEGY for django", true),
            ("Updating The Dependency foo from 1.0 to 2.0", true),
            ("Add a new test environment", false),
            ("Migrate the build backend to hatchling", false),
            ("", false),
        ];
        for (task, expected) in cases {
            assert_eq!(is_update_task(task), expected, "task: {task:?}");
        }
    }

    #[test]
    fn test_for_task_selects_update_set() {
        let set = ProfileSet::for_task("You are updating the dependency 'requests'.");
        assert_eq!(set.generators[0].name, "ApiCompatibilityAnalyst");
        assert_eq!(set.judge.name, "UpdateJudge");
    }

    #[test]
    fn test_for_task_selects_general_set() {
        let set = ProfileSet::for_task("Add pytest to the dev environment");
        assert_eq!(set.generators[0].name, "ConfigurationSpecialist");
        assert_eq!(set.generators[1].name, "WorkflowSpecialist");
        assert_eq!(set.judge.name, "Judge");
    }

    #[test]
    fn test_generator_order_is_stable() {
        // The first generator is the judge's fallback; both sets keep a
        // deterministic order.
        assert_eq!(ProfileSet::general().generators.len(), 2);
        assert_eq!(ProfileSet::update().generators.len(), 2);
        assert_eq!(
            ProfileSet::update().generators[1].name,
            "MinimalMigrationSpecialist"
        );
    }

    #[test]
    fn test_system_prompt_includes_role_and_instructions() {
        let profile = Profile::new("X", "test role", "Do the thing.");
        let prompt = profile.system_prompt();
        assert!(prompt.contains("test role"));
        assert!(prompt.contains("Do the thing."));
    }
}
