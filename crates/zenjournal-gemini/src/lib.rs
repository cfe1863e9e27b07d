// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini-backed implementation of the analysis provider.
//!
//! Sends journal entry text to the Gemini generateContent API with a
//! structured-output schema and maps the result into an
//! [`EntryAnalysis`]. Short entries never reach the network, and any
//! transport or parse failure degrades to a fixed fallback payload
//! instead of an error.

pub mod client;
pub mod types;

use async_trait::async_trait;
use tracing::warn;

use zenjournal_config::model::GeminiConfig;
use zenjournal_core::types::{EntryAnalysis, Mood};
use zenjournal_core::{AnalysisProvider, JournalError};

use crate::client::GeminiClient;
use crate::types::{Content, GenerateContentRequest, GenerationConfig, Part};

/// Entries trimmed shorter than this are answered with a placeholder
/// and never sent to the API.
pub const MIN_ANALYZABLE_LEN: usize = 10;

const PLACEHOLDER_INSIGHT: &str = "Keep writing to see deep AI insights about your day!";

const FALLBACK_INSIGHT: &str =
    "Your thoughts are being processed. Reflection is the first step to clarity.";
const FALLBACK_TAG: &str = "Reflection";

/// Analysis provider backed by the Gemini API.
pub struct GeminiAnalyzer {
    client: GeminiClient,
}

impl GeminiAnalyzer {
    /// Builds an analyzer from the `[gemini]` config section.
    ///
    /// The API key comes from the config file or, failing that, the
    /// `GEMINI_API_KEY` environment variable.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, JournalError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                JournalError::Config(
                    "no Gemini API key: set gemini.api_key or GEMINI_API_KEY".to_string(),
                )
            })?;
        let client = GeminiClient::new(api_key, config.model.clone())?;
        Ok(Self { client })
    }

    #[cfg(test)]
    fn with_client(client: GeminiClient) -> Self {
        Self { client }
    }

    /// The placeholder returned for entries too short to analyze.
    pub fn placeholder() -> EntryAnalysis {
        EntryAnalysis {
            mood: Mood::Reflective.to_string(),
            insight: PLACEHOLDER_INSIGHT.to_string(),
            tags: Vec::new(),
        }
    }

    /// The fallback returned when the API call or response parse fails.
    pub fn fallback() -> EntryAnalysis {
        EntryAnalysis {
            mood: Mood::Reflective.to_string(),
            insight: FALLBACK_INSIGHT.to_string(),
            tags: vec![FALLBACK_TAG.to_string()],
        }
    }

    fn build_request(text: &str) -> GenerateContentRequest {
        let prompt = format!(
            "Act as a compassionate journal assistant. Analyze the following private \
             reflection and provide a one-word mood, a deep supportive insight, and 3-4 \
             conceptual tags. Entry content: \"{text}\""
        );
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::analysis(),
        }
    }

    async fn try_analyze(&self, text: &str) -> Result<EntryAnalysis, JournalError> {
        let response = self.client.generate_content(&Self::build_request(text)).await?;
        let payload = response.first_text().ok_or_else(|| JournalError::Analysis {
            message: "response contained no candidates".into(),
            source: None,
        })?;
        serde_json::from_str(payload).map_err(|e| JournalError::Analysis {
            message: format!("malformed analysis payload: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[async_trait]
impl AnalysisProvider for GeminiAnalyzer {
    async fn analyze(&self, text: &str) -> EntryAnalysis {
        if text.trim().len() < MIN_ANALYZABLE_LEN {
            return Self::placeholder();
        }
        match self.try_analyze(text).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, "analysis failed, returning fallback");
                Self::fallback()
            }
        }
    }
}
