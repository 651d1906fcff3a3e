//! Consensus domain
//!
//! This module contains the core concepts for multi-generator consensus.
//!
//! # Flow
//!
//! ```text
//! task + context
//!     │
//!     ▼
//! ProfileSet::for_task ── trigger-phrase dispatch (general vs. update)
//!     │
//!     ▼
//! generators ──► Suggestion per profile (order preserved)
//!     │
//!     ▼
//! judge ──► Decision (falls back to the first suggestion
//!           when the judge's choice matches no known name)
//! ```
//!
//! Everything here is pure: raw generator/judge output enters as a
//! [`parsing::RawResponse`] and leaves as typed values. No call in this
//! module can fail on malformed model output.

pub mod extract;
pub mod parsing;
pub mod profile;
pub mod round;

// Re-export main types
pub use extract::extract_labeled_json;
pub use parsing::{RawResponse, parse_decision, parse_suggestion};
pub use profile::{Profile, ProfileSet, is_update_task};
pub use round::{Decision, RoundResult, Suggestion};
