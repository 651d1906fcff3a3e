//! Port for structured round logging.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures judged
//! rounds in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured round event for logging.
pub struct RoundEvent {
    /// Event type identifier (e.g., "suggestion_generated", "round_judged").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl RoundEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging round events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible —
/// logging failures must never disrupt a round.
pub trait RoundLogger: Send + Sync {
    /// Record a round event.
    fn log(&self, event: RoundEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoRoundLogger;

impl RoundLogger for NoRoundLogger {
    fn log(&self, _event: RoundEvent) {}
}
