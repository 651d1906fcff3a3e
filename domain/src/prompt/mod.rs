//! Prompt domain
//!
//! Templates for generating prompts at each stage of a consensus round.

mod template;

pub use template::PromptTemplate;
