//! Progress notification port
//!
//! Defines the interface for reporting progress during batch execution.

/// Callback for progress updates while a batch runs
///
/// Implementations live in the presentation layer and can display progress
/// in various ways (console, logs, etc.)
pub trait BatchProgress: Send + Sync {
    /// Called once before any item round starts
    fn on_batch_start(&self, total_items: usize);

    /// Called when an item's round completes (in completion order, which
    /// may differ from input order)
    fn on_item_complete(&self, package: &str, success: bool);

    /// Called once after all item rounds have finished
    fn on_batch_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl BatchProgress for NoProgress {
    fn on_batch_start(&self, _total_items: usize) {}
    fn on_item_complete(&self, _package: &str, _success: bool) {}
    fn on_batch_complete(&self) {}
}
