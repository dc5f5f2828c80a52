//! One generation: validated input in, finished report record out.

use crate::report::{build_prompt, ReportData, ReportInput, SummarySource, ValidationError};
use crate::summarize::{Summarize, SummarizeError};
use tracing::{info, warn};

/// Fixed text substituted for the summary when the summarizer call fails.
pub const FALLBACK_SUMMARY: &str = "Summary unavailable.";

/// A produced report, plus the summarizer error when the fallback was used.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub report: ReportData,
    pub summarizer_error: Option<SummarizeError>,
}

/// Drives one report generation against the summarizer it was constructed
/// with. Stateless between calls.
pub struct Generator<S> {
    summarizer: S,
}

impl<S: Summarize> Generator<S> {
    pub fn new(summarizer: S) -> Self {
        Self { summarizer }
    }

    /// Validate `input`, summarize it, and assemble the report record.
    ///
    /// A summarizer failure does not fail the operation: the fixed fallback
    /// sentence stands in for the summary and the error rides along in the
    /// outcome for the caller to surface. Validation failure aborts before
    /// the summarizer is touched.
    pub async fn generate(&self, input: &ReportInput) -> Result<GenerateOutcome, ValidationError> {
        input.validate()?;
        let prompt = build_prompt(input);
        let (summary, summary_source, summarizer_error) =
            match self.summarizer.summarize(&prompt).await {
                Ok(text) => (text.trim().to_string(), SummarySource::Generated, None),
                Err(e) => {
                    warn!(error = %e, "summarizer failed; using fallback summary");
                    (FALLBACK_SUMMARY.to_string(), SummarySource::Fallback, Some(e))
                }
            };
        info!(source = ?summary_source, "report generated");
        let report = ReportData {
            input: input.clone(),
            summary,
            summary_source,
        };
        Ok(GenerateOutcome {
            report,
            summarizer_error,
        })
    }
}
