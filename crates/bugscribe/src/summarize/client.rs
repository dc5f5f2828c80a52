//! Gemini generateContent API client.

use super::config::SummarizerConfig;
use super::Summarize;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("api error: status {0} body {1}")]
    Api(u16, String),
    #[error("response parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("empty response: no candidate text returned")]
    EmptyResponse,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ContentPart>>,
}

#[derive(Deserialize)]
struct ContentPart {
    text: Option<String>,
}

/// Extract the first candidate's text from a generateContent response body.
/// Multi-part candidates are concatenated in order.
pub fn parse_summary(body: &str) -> Result<String, SummarizeError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;
    let text: String = parsed
        .candidates
        .into_iter()
        .flatten()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .into_iter()
        .flatten()
        .filter_map(|p| p.text)
        .collect();
    if text.trim().is_empty() {
        return Err(SummarizeError::EmptyResponse);
    }
    Ok(text)
}

/// Single-shot client for the Gemini generateContent endpoint. No retries,
/// no rate limiting, no timeout beyond what the transport enforces.
pub struct GeminiClient {
    config: SummarizerConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { config, client })
    }
}

impl Summarize for GeminiClient {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            urlencoding::encode(&self.config.api_key),
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        debug!(model = %self.config.model, prompt_chars = prompt.len(), "sending generateContent request");
        let res = self.client.post(url).json(&body).send().await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(SummarizeError::Api(status.as_u16(), text));
        }
        let summary = parse_summary(&text)?;
        info!(chars = summary.len(), "summary received");
        Ok(summary.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_summary_extracts_first_candidate() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "First." }], "role": "model" } },
                { "content": { "parts": [{ "text": "Second." }], "role": "model" } }
            ]
        }"#;
        assert_eq!(parse_summary(body).unwrap(), "First.");
    }

    #[test]
    fn parse_summary_concatenates_parts() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "One " }, { "text": "paragraph." }] } }
            ]
        }"#;
        assert_eq!(parse_summary(body).unwrap(), "One paragraph.");
    }

    #[test]
    fn parse_summary_rejects_missing_candidates() {
        let err = parse_summary(r#"{ "promptFeedback": { "safetyRatings": [] } }"#).unwrap_err();
        assert!(matches!(err, SummarizeError::EmptyResponse));
    }

    #[test]
    fn parse_summary_rejects_invalid_json() {
        let err = parse_summary("not json").unwrap_err();
        assert!(matches!(err, SummarizeError::Parse(_)));
    }
}
