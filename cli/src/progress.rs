//! Console progress reporter for batch runs

use colored::Colorize;
use concord_application::BatchProgress;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Prints one line per completed package, with a running count.
pub struct ConsoleProgress {
    completed: AtomicUsize,
    total: AtomicUsize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgress for ConsoleProgress {
    fn on_batch_start(&self, total_items: usize) {
        self.total.store(total_items, Ordering::Relaxed);
        println!(
            "{}",
            format!("Analyzing {} package(s)...", total_items).cyan()
        );
    }

    fn on_item_complete(&self, package: &str, success: bool) {
        let done = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        let total = self.total.load(Ordering::Relaxed);
        let mark = if success {
            "ok".green()
        } else {
            "failed".red()
        };
        println!("  [{done}/{total}] {} {mark}", package.cyan());
    }

    fn on_batch_complete(&self) {
        println!();
    }
}
