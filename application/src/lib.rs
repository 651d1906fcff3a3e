//! Application layer for concord
//!
//! This crate contains use cases and port definitions for the consensus
//! engine. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress::{BatchProgress, NoProgress},
    round_logger::{NoRoundLogger, RoundEvent, RoundLogger},
    text_completion::{CompletionError, TextCompletion},
};
pub use use_cases::run_batch::{DEFAULT_CONCURRENCY, RunBatchInput, RunBatchUseCase};
pub use use_cases::run_round::{RunRoundInput, RunRoundUseCase};
