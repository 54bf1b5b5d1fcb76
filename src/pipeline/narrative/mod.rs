//! Optional abstractive summary of a whole report.
//!
//! The structured extraction never depends on this. When no summarizer is
//! configured, or the summarizer fails, callers get a fixed degraded text
//! instead of an error.

pub mod ollama;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::NARRATIVE_INPUT_CHARS;

pub use ollama::OllamaNarrativeSummarizer;

pub const NARRATIVE_UNAVAILABLE: &str = "Summary generation not available";

#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("Summarizer is not reachable at {0}")]
    Connection(String),

    #[error("Summarizer returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Summarizer returned an empty summary")]
    EmptySummary,
}

/// Produces a short prose summary of prepared report text.
pub trait NarrativeSummarizer: Send + Sync {
    fn summarize(&self, text: &str) -> Result<String, NarrativeError>;
}

static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("Invalid newline regex"));

/// Collapse newline runs into a single space and keep the first
/// [`NARRATIVE_INPUT_CHARS`] characters.
pub fn prepare_narrative_input(text: &str) -> String {
    NEWLINE_RUNS
        .replace_all(text, " ")
        .chars()
        .take(NARRATIVE_INPUT_CHARS)
        .collect()
}

/// Narrative for `text`, or a degraded message. Never fails.
pub fn generate_narrative(summarizer: Option<&dyn NarrativeSummarizer>, text: &str) -> String {
    let Some(summarizer) = summarizer else {
        return NARRATIVE_UNAVAILABLE.to_string();
    };

    let input = prepare_narrative_input(text);
    match summarizer.summarize(&input) {
        Ok(narrative) => narrative,
        Err(e) => {
            tracing::warn!(error = %e, "Narrative summary failed");
            format!("Summary generation error: {e}")
        }
    }
}

/// Test double returning a fixed response or failing.
pub struct MockNarrativeSummarizer {
    response: Option<String>,
}

impl MockNarrativeSummarizer {
    pub fn new(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
        }
    }

    /// A summarizer whose every call fails with [`NarrativeError::EmptySummary`].
    pub fn failing() -> Self {
        Self { response: None }
    }
}

impl NarrativeSummarizer for MockNarrativeSummarizer {
    fn summarize(&self, _text: &str) -> Result<String, NarrativeError> {
        self.response.clone().ok_or(NarrativeError::EmptySummary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the input it was given.
    struct RecordingSummarizer {
        seen: Mutex<Option<String>>,
    }

    impl NarrativeSummarizer for RecordingSummarizer {
        fn summarize(&self, text: &str) -> Result<String, NarrativeError> {
            *self.seen.lock().unwrap() = Some(text.to_string());
            Ok("ok".into())
        }
    }

    #[test]
    fn collapses_newline_runs() {
        assert_eq!(prepare_narrative_input("a\n\n\nb\r\nc"), "a b c");
    }

    #[test]
    fn truncates_to_input_limit() {
        let long = "x".repeat(NARRATIVE_INPUT_CHARS + 500);
        assert_eq!(prepare_narrative_input(&long).chars().count(), NARRATIVE_INPUT_CHARS);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "°".repeat(NARRATIVE_INPUT_CHARS + 1);
        let prepared = prepare_narrative_input(&long);
        assert_eq!(prepared.chars().count(), NARRATIVE_INPUT_CHARS);
    }

    #[test]
    fn unavailable_without_summarizer() {
        assert_eq!(generate_narrative(None, "text"), NARRATIVE_UNAVAILABLE);
    }

    #[test]
    fn returns_summarizer_output() {
        let mock = MockNarrativeSummarizer::new("45-year-old male with chest pain.");
        assert_eq!(
            generate_narrative(Some(&mock), "report"),
            "45-year-old male with chest pain."
        );
    }

    #[test]
    fn failure_becomes_error_text() {
        let mock = MockNarrativeSummarizer::failing();
        assert_eq!(
            generate_narrative(Some(&mock), "report"),
            "Summary generation error: Summarizer returned an empty summary"
        );
    }

    #[test]
    fn summarizer_receives_prepared_input() {
        let recorder = RecordingSummarizer { seen: Mutex::new(None) };
        generate_narrative(Some(&recorder), "line one\n\nline two");
        assert_eq!(
            recorder.seen.lock().unwrap().as_deref(),
            Some("line one line two")
        );
    }
}
