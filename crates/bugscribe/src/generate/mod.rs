//! Report generation pipeline: validate, prompt, summarize, degrade on failure.

mod pipeline;

pub use pipeline::{GenerateOutcome, Generator, FALLBACK_SUMMARY};
