//! The six report fields and required-field validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker substituted for an empty video link in the prompt and the document.
pub(crate) const NO_VIDEO_MARKER: &str = "none";

#[derive(Error, Debug)]
#[error("missing required field(s): {}", .missing.join(", "))]
pub struct ValidationError {
    /// Names of the required fields that were empty after trimming.
    pub missing: Vec<&'static str>,
}

/// One bug report's worth of user input. Held only for the duration of a
/// single generation; values are interpolated verbatim downstream.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReportInput {
    pub title: String,
    pub details: String,
    pub repro_steps: String,
    pub expected: String,
    pub actual: String,
    /// Optional; an empty string means no video.
    pub video_link: String,
}

impl ReportInput {
    /// Check that every required field is non-empty after trimming.
    /// The video link is exempt.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.details.trim().is_empty() {
            missing.push("details");
        }
        if self.repro_steps.trim().is_empty() {
            missing.push("repro_steps");
        }
        if self.expected.trim().is_empty() {
            missing.push("expected");
        }
        if self.actual.trim().is_empty() {
            missing.push("actual");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// The trimmed video link, or the literal `none` marker when empty.
    pub fn video_link_or_none(&self) -> &str {
        let link = self.video_link.trim();
        if link.is_empty() {
            NO_VIDEO_MARKER
        } else {
            link
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ReportInput {
        ReportInput {
            title: "Login fails".into(),
            details: "Clicking login does nothing".into(),
            repro_steps: "1. Open app 2. Click login".into(),
            expected: "Redirect to dashboard".into(),
            actual: "Nothing happens".into(),
            video_link: String::new(),
        }
    }

    #[test]
    fn validate_accepts_filled_input() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn validate_accepts_empty_video_link() {
        let mut input = filled();
        input.video_link = "   ".into();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut input = filled();
        input.title = "   ".into();
        let err = input.validate().unwrap_err();
        assert_eq!(err.missing, vec!["title"]);
    }

    #[test]
    fn validate_names_every_missing_field() {
        let input = ReportInput::default();
        let err = input.validate().unwrap_err();
        assert_eq!(
            err.missing,
            vec!["title", "details", "repro_steps", "expected", "actual"]
        );
        assert!(err.to_string().contains("title"));
        assert!(err.to_string().contains("actual"));
    }

    #[test]
    fn video_link_or_none_substitutes_marker() {
        let mut input = filled();
        assert_eq!(input.video_link_or_none(), "none");
        input.video_link = " https://youtu.be/abc ".into();
        assert_eq!(input.video_link_or_none(), "https://youtu.be/abc");
    }
}
