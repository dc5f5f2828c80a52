//! Markdown document rendering from a report record.

use bugscribe::ReportData;
use std::io::Write;
use std::path::Path;

/// Render the Markdown document to `out_path`.
pub fn render_report(data: &ReportData, out_path: impl AsRef<Path>) -> Result<(), ReportError> {
    let markdown = render_markdown(data);
    let mut f = std::fs::File::create(out_path.as_ref()).map_err(ReportError::Io)?;
    f.write_all(markdown.as_bytes()).map_err(ReportError::Io)?;
    Ok(())
}

/// Build the Markdown document string. Section order and wording are fixed;
/// user input is interpolated verbatim (no Markdown escaping).
pub fn render_markdown(data: &ReportData) -> String {
    format!(
        "# Bug Report: {title}\n\
         \n\
         **Summary (AI):**\n\
         {summary}\n\
         \n\
         ---\n\
         \n\
         ## Details\n\
         {details}\n\
         \n\
         ---\n\
         \n\
         ## Reproduction Steps\n\
         {repro_steps}\n\
         \n\
         ---\n\
         \n\
         ## Expected Result\n\
         {expected}\n\
         \n\
         ---\n\
         \n\
         ## Actual Result\n\
         {actual}\n\
         \n\
         ---\n\
         \n\
         ## Video Link\n\
         {video_link}\n\
         \n\
         ---\n",
        title = data.input.title,
        summary = data.summary,
        details = data.input.details,
        repro_steps = data.input.repro_steps,
        expected = data.input.expected,
        actual = data.input.actual,
        video_link = data.input.video_link_or_none(),
    )
}

#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "io: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}
