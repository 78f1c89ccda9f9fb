//! Adaptation backends: the pluggable "adapt(document, job description) -> text"
//! capability behind the generator.
//!
//! Two hosted-model backends plus the template fallback share one trait.
//! The backend is chosen once at startup from `Config` and carried in
//! `AppState` as `Arc<dyn DocumentAdapter>`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::{AiProvider, Config};
use crate::generation::generator::AdaptationRequest;
use crate::llm_client::openai::OpenAiClient;
use crate::llm_client::{LlmClient, LlmError};

#[async_trait]
pub trait DocumentAdapter: Send + Sync {
    /// Short identifier for logs: "anthropic" | "openai" | "template".
    fn name(&self) -> &'static str;

    async fn adapt(&self, request: &AdaptationRequest<'_>) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Hosted backends
// ────────────────────────────────────────────────────────────────────────────

pub struct AnthropicAdapter(pub LlmClient);

#[async_trait]
impl DocumentAdapter for AnthropicAdapter {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn adapt(&self, request: &AdaptationRequest<'_>) -> Result<String, LlmError> {
        // The Messages call carries the whole instruction in the user turn.
        self.0.complete(&request.prompt()).await
    }
}

pub struct OpenAiAdapter(pub OpenAiClient);

#[async_trait]
impl DocumentAdapter for OpenAiAdapter {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn adapt(&self, request: &AdaptationRequest<'_>) -> Result<String, LlmError> {
        self.0
            .complete(&request.prompt(), request.kind.system_prompt())
            .await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template fallback
// ────────────────────────────────────────────────────────────────────────────

/// Non-AI backend. Never fails.
pub struct TemplateAdapter;

#[async_trait]
impl DocumentAdapter for TemplateAdapter {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn adapt(&self, request: &AdaptationRequest<'_>) -> Result<String, LlmError> {
        Ok(request.kind.fallback(request.source))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Picks the backend for the process lifetime.
///
/// Precedence: the configured provider wins only when its own key is present.
/// A key for the other provider does not switch providers; the template is
/// used instead.
pub fn select_adapter(config: &Config) -> Arc<dyn DocumentAdapter> {
    let adapter: Arc<dyn DocumentAdapter> = match (
        &config.ai_provider,
        &config.anthropic_api_key,
        &config.openai_api_key,
    ) {
        (AiProvider::Anthropic, Some(key), _) => {
            Arc::new(AnthropicAdapter(LlmClient::new(key.clone())))
        }
        (AiProvider::OpenAi, _, Some(key)) => Arc::new(OpenAiAdapter(OpenAiClient::new(key.clone()))),
        _ => {
            warn!(
                "No API key for AI provider '{}'; using template fallback. \
                Set ANTHROPIC_API_KEY or OPENAI_API_KEY for AI-generated documents.",
                config.ai_provider
            );
            Arc::new(TemplateAdapter)
        }
    };

    info!("Adaptation backend: {}", adapter.name());
    adapter
}
