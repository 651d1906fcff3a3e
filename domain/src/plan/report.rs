//! Bulk report assembly and code-change deduplication.
//!
//! A batch run produces one judged plan per package. The pieces are merged
//! here: breaking changes keep their package tag, and code changes are
//! deduplicated by location so that two packages proposing edits to the same
//! lines surface as a single entry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::update_plan::CodeChange;

/// One dependency upgrade to analyze.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    pub package: String,
    pub old_version: String,
    pub new_version: String,
}

impl UpdateItem {
    pub fn new(
        package: impl Into<String>,
        old_version: impl Into<String>,
        new_version: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            old_version: old_version.into(),
            new_version: new_version.into(),
        }
    }
}

/// A breaking change tagged with the package whose upgrade introduced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageBreakingChange {
    pub package: String,
    pub old_version: String,
    pub new_version: String,
    pub change: String,
}

/// Consolidated outcome of a batch run.
///
/// Every item contributes either to `breaking_changes` / `code_changes` or
/// to `failed_packages`; nothing is silently dropped. A report is produced
/// even when every item failed — callers compare `failed_packages` against
/// `packages_analyzed` to detect total failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkReport {
    pub breaking_changes: Vec<PackageBreakingChange>,
    /// Deduplicated by `(file, line_range)`
    pub code_changes: Vec<CodeChange>,
    /// Number of items in the batch, regardless of per-item success
    pub packages_analyzed: usize,
    pub failed_packages: Vec<String>,
}

impl BulkReport {
    /// True when every item in the batch landed in `failed_packages`.
    ///
    /// A successful round whose suggestion carried no plan does not count
    /// as a failure.
    pub fn all_failed(&self) -> bool {
        self.packages_analyzed > 0 && self.failed_packages.len() == self.packages_analyzed
    }
}

/// Deduplicate code changes by `(file, line_range)`.
///
/// The first occurrence of a key anchors the output position. When a later
/// change lands on the same key:
///
/// - the change with the strictly longer `description` survives,
/// - `packages` accumulates every distinct `package` attribution seen for
///   the key (set semantics), and stays unset while only one distinct
///   package has proposed the location.
///
/// Must run single-threaded over the complete list: later merges depend on
/// the accumulated state. Idempotent — a second pass over its own output is
/// a no-op.
pub fn dedup_code_changes(changes: Vec<CodeChange>) -> Vec<CodeChange> {
    let mut out: Vec<CodeChange> = Vec::new();
    let mut seen: HashMap<(String, Option<String>), usize> = HashMap::new();

    for change in changes {
        let key = (change.file.clone(), change.line_range.clone());
        match seen.get(&key) {
            None => {
                seen.insert(key, out.len());
                out.push(change);
            }
            Some(&index) => merge_change(&mut out[index], change),
        }
    }

    out
}

fn merge_change(existing: &mut CodeChange, incoming: CodeChange) {
    // Accumulate distinct package attributions across all proposals for
    // this location, starting from whatever the survivor already carries.
    let mut packages = existing.packages.take().unwrap_or_default();
    if packages.is_empty()
        && let Some(package) = &existing.package
    {
        packages.push(package.clone());
    }
    for package in incoming
        .package
        .iter()
        .chain(incoming.packages.iter().flatten())
    {
        if !packages.contains(package) {
            packages.push(package.clone());
        }
    }

    if incoming.description.len() > existing.description.len() {
        *existing = incoming;
    }

    if packages.len() > 1 {
        existing.packages = Some(packages);
    } else {
        existing.packages = None;
    }
}
