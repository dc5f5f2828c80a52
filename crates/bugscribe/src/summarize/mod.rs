//! Summarizer client: prompt in, one-paragraph summary out.

mod client;
mod config;

pub use client::{parse_summary, GeminiClient, SummarizeError};
pub use config::{ConfigError, SummarizerConfig};

/// Seam over the external text-generation service, so tests can substitute
/// a mock for the real client.
#[allow(async_fn_in_trait)]
pub trait Summarize {
    /// Produce a summary for `prompt`, or the reason the service call failed.
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError>;
}
