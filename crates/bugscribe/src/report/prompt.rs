//! Prompt composition for the summarizer.

use super::ReportInput;

const INSTRUCTION: &str = "Please summarize this bug report in a single paragraph, \
focusing on the core problem, how to reproduce it, and the difference between the \
expected and actual results:";

/// Build the summarizer prompt from the six report fields.
/// An empty video link appears as the literal `none` marker.
pub fn build_prompt(input: &ReportInput) -> String {
    format!(
        "{INSTRUCTION}\n\n\
         Title: {title}\n\
         Details: {details}\n\
         Reproduction Steps: {repro_steps}\n\
         Expected Result: {expected}\n\
         Actual Result: {actual}\n\
         Video Link: {video_link}\n\n\
         Summary:\n",
        title = input.title,
        details = input.details,
        repro_steps = input.repro_steps,
        expected = input.expected,
        actual = input.actual,
        video_link = input.video_link_or_none(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_all_fields() {
        let input = ReportInput {
            title: "Crash on save".into(),
            details: "Editor crashes when saving a large file".into(),
            repro_steps: "1. Open 100MB file 2. Press save".into(),
            expected: "File saved".into(),
            actual: "Segfault".into(),
            video_link: "https://vimeo.com/123".into(),
        };
        let prompt = build_prompt(&input);
        assert!(prompt.contains("Title: Crash on save"));
        assert!(prompt.contains("Details: Editor crashes when saving a large file"));
        assert!(prompt.contains("Reproduction Steps: 1. Open 100MB file 2. Press save"));
        assert!(prompt.contains("Expected Result: File saved"));
        assert!(prompt.contains("Actual Result: Segfault"));
        assert!(prompt.contains("Video Link: https://vimeo.com/123"));
        assert!(prompt.ends_with("Summary:\n"));
    }

    #[test]
    fn prompt_marks_missing_video_link() {
        let input = ReportInput {
            title: "t".into(),
            details: "d".into(),
            repro_steps: "r".into(),
            expected: "e".into(),
            actual: "a".into(),
            video_link: String::new(),
        };
        let prompt = build_prompt(&input);
        assert!(prompt.contains("Video Link: none\n"));
    }
}
