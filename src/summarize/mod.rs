use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::{Result, SummarizeError};

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Client for the Gemini generateContent endpoint.
pub struct SummaryClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl SummaryClient {
    pub fn new(http: reqwest::Client, config: &GeminiConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Summarize a transcript in the given target language.
    ///
    /// The transcript is passed through in full; only the service's own
    /// input limits apply.
    pub async fn summarize(&self, transcript: &str, target_language: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: build_prompt(transcript, target_language),
                }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizeError::SummarizationFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SummarizeError::SummarizationFailed(format!(
                "{} returned HTTP {}",
                self.model,
                response.status()
            ))
            .into());
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SummarizeError::SummarizationFailed(e.to_string()))?;

        let summary = extract_text(body);
        if summary.trim().is_empty() {
            return Err(
                SummarizeError::SummarizationFailed("model returned no text".to_string()).into(),
            );
        }

        Ok(summary)
    }
}

fn build_prompt(transcript: &str, target_language: &str) -> String {
    format!(
        "Summarize this text so the user can understand the content of the video. \
         Note down the important details. Be as natural as possible. \
         The summary should be in {target_language}:\n\n{transcript}"
    )
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateResponse) -> String {
    let mut out = String::new();
    if let Some(candidate) = response.candidates.into_iter().next() {
        if let Some(content) = candidate.content {
            for part in content.parts {
                if let Some(text) = part.text {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    out.push_str(&text);
                }
            }
        }
    }
    out
}
