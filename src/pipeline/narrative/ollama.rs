use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{NarrativeError, NarrativeSummarizer};

const SYSTEM_PROMPT: &str = "You summarize clinical reports. Reply with a short \
factual paragraph of two or three sentences. Do not add findings that are not \
in the report.";

/// Narrative summaries from a local Ollama instance.
pub struct OllamaNarrativeSummarizer {
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaNarrativeSummarizer {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Result<Self, NarrativeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| NarrativeError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl NarrativeSummarizer for OllamaNarrativeSummarizer {
    fn summarize(&self, text: &str) -> Result<String, NarrativeError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt: text,
            system: SYSTEM_PROMPT,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                NarrativeError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                NarrativeError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                NarrativeError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NarrativeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| NarrativeError::ResponseParsing(e.to_string()))?;

        let narrative = parsed.response.trim();
        if narrative.is_empty() {
            return Err(NarrativeError::EmptySummary);
        }
        Ok(narrative.to_string())
    }
}
