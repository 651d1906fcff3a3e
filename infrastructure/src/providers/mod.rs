//! Completion providers
//!
//! Adapters implementing the application layer's `TextCompletion` port.

mod scripted;

pub use scripted::ScriptedCompletion;

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "openai")]
pub use openai::OpenAiCompletion;
