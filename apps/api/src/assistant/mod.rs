//! HR Guru assistant: intent resolution, action dispatch, response composition,
//! and the keyword fallback used when no LLM provider is configured.

pub mod actions;
pub mod composer;
pub mod dispatcher;
pub mod error;
pub mod fallback;
pub mod handlers;
pub mod history;
pub mod intent;
pub mod orchestrator;
pub mod params;
pub mod prompts;
pub mod reply;
pub mod resolver;
pub mod tone;

#[cfg(test)]
pub mod testing;

pub use orchestrator::HrGuru;
