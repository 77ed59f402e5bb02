//! LLM agent module: the generation collaborator and the operations on it.
//!
//! The hosted model sits behind the narrow [`Generator`] trait so tests can
//! substitute a stub. Retry and timeout policy live with the caller, not here.

use crate::analysis::{self, ParsedAnalysis};
use crate::config::Config;
use crate::prompts;
use rstructor::{GeminiClient, GeminiModel, LLMClient};
use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),
}

/// Narrow interface to the hosted generation service: one prompt in, free
/// text out.
pub trait Generator {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, AgentError>> + Send;
}

/// Gemini-backed [`Generator`].
pub struct GeminiGenerator {
    client: GeminiClient,
}

impl std::fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator").finish_non_exhaustive()
    }
}

impl GeminiGenerator {
    /// Build a generator from config, failing fast when the API key is absent.
    pub fn from_config(config: &Config) -> Result<Self, AgentError> {
        let api_key = config.api_key()?;
        let model = parse_gemini_model(&config.agent.model);

        let client = GeminiClient::new(api_key)
            .map_err(|e| AgentError::RequestFailed(e.to_string()))?
            .model(model);

        Ok(Self { client })
    }
}

impl Generator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AgentError> {
        log::debug!("sending prompt of {} characters", prompt.chars().count());

        let result = self
            .client
            .generate_with_metadata(prompt)
            .await
            .map_err(|e| AgentError::RequestFailed(e.to_string()))?;

        Ok(result.text.trim().to_string())
    }
}

/// Parse a model string into a GeminiModel
fn parse_gemini_model(model: &str) -> GeminiModel {
    match model {
        "gemini-2.0-flash" => GeminiModel::Gemini20Flash,
        "gemini-2.5-flash" => GeminiModel::Gemini25Flash,
        "gemini-2.5-pro" => GeminiModel::Gemini25Pro,
        _ => GeminiModel::Gemini20Flash, // Default
    }
}

/// Analyse text for sentiment, topics, word count, and readability.
///
/// Whatever shape the reply takes, this returns a best-effort
/// [`ParsedAnalysis`]; a malformed reply is not an error.
pub async fn analyse<G: Generator>(generator: &G, text: &str) -> Result<ParsedAnalysis, AgentError> {
    let prompt = prompts::analysis_prompt(text);
    let reply = generator.generate(&prompt).await?;
    Ok(analysis::parse_analysis(&reply))
}

/// Summarise text, sizing the summary to the input length.
pub async fn summarise<G: Generator>(generator: &G, text: &str) -> Result<String, AgentError> {
    let prompt = prompts::summary_prompt(text);
    generator.generate(&prompt).await
}

/// An abstract and keyword set for a document.
#[derive(Debug, Clone)]
pub struct Research {
    pub abstract_text: String,
    pub keywords: String,
}

/// Generate an abstract and keywords as two independent generation calls.
pub async fn research<G: Generator>(
    generator: &G,
    text: &str,
    word_target: usize,
    keyword_count: usize,
) -> Result<Research, AgentError> {
    let abstract_text = generator
        .generate(&prompts::abstract_prompt(text, word_target))
        .await?;
    let keywords = generator
        .generate(&prompts::keywords_prompt(text, keyword_count))
        .await?;

    Ok(Research {
        abstract_text,
        keywords,
    })
}
