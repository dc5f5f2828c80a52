//! Report input model, validation, and prompt composition.
//! (The Markdown document itself is rendered in the bugscribe_report crate.)

mod input;
mod prompt;

pub use input::{ReportInput, ValidationError};
pub use prompt::build_prompt;

use serde::{Deserialize, Serialize};

/// Where the summary text came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarySource {
    /// Returned by the summarizer service.
    Generated,
    /// The fixed fallback sentence; the summarizer call failed.
    Fallback,
}

/// Data passed to the Markdown renderer: input fields plus the summary.
/// Recomputed in full on every generation; carries no identity or history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportData {
    pub input: ReportInput,
    pub summary: String,
    pub summary_source: SummarySource,
}
