//! Update plan domain
//!
//! Structured plans embedded in judged suggestions, and the aggregation of
//! many per-package plans into one deduplicated bulk report.

pub mod report;
pub mod update_plan;

// Re-export main types
pub use report::{BulkReport, PackageBreakingChange, UpdateItem, dedup_code_changes};
pub use update_plan::{CodeChange, UPDATE_PLAN_LABEL, UpdatePlan};
