//! Domain layer for concord
//!
//! This crate contains the core business logic, entities, and value objects
//! for multi-generator consensus. It has no dependencies on infrastructure
//! or presentation concerns, and no I/O.
//!
//! # Core Concepts
//!
//! ## Round
//!
//! One generate-then-judge cycle for a single task: every generator profile
//! produces a [`Suggestion`], and a judge profile selects or merges the best
//! one into a [`Decision`].
//!
//! ## Batch
//!
//! A set of independent dependency updates, each resolved via its own round,
//! then aggregated and deduplicated into one [`BulkReport`].

pub mod consensus;
pub mod core;
pub mod plan;
pub mod prompt;

// Re-export commonly used types
pub use consensus::{
    extract::extract_labeled_json,
    parsing::{RawResponse, parse_decision, parse_suggestion},
    profile::{Profile, ProfileSet, is_update_task},
    round::{Decision, RoundResult, Suggestion},
};
pub use crate::core::error::DomainError;
pub use plan::{
    report::{BulkReport, PackageBreakingChange, UpdateItem, dedup_code_changes},
    update_plan::{CodeChange, UPDATE_PLAN_LABEL, UpdatePlan},
};
pub use prompt::PromptTemplate;

/// Free-form context passed alongside a task (project files, versions, etc.).
pub type TaskContext = serde_json::Map<String, serde_json::Value>;
