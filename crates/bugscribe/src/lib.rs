//! bugscribe — structured bug reports with an AI-generated summary.
//!
//! Collects six report fields, asks the Gemini API for a one-paragraph
//! summary, and produces a report record for Markdown rendering. A failed
//! summarizer call never loses the report: a fixed fallback sentence stands
//! in and the error is surfaced alongside the finished document.

pub mod generate;
pub mod report;
pub mod summarize;

pub use generate::{GenerateOutcome, Generator, FALLBACK_SUMMARY};
pub use report::{build_prompt, ReportData, ReportInput, SummarySource, ValidationError};
pub use summarize::{ConfigError, GeminiClient, Summarize, SummarizeError, SummarizerConfig};
