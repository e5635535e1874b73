use crate::config::Config;
use crate::error::ProviderError;
use std::sync::Arc;
use tracing::info;

use super::completion::{SelectedCompletion, select};
use super::gemini::{GeminiClient, LanguageClient};
use super::openai::OpenaiClient;
use super::upstream::build_client;

/// Upstream AI clients built once at startup.
///
/// A client without an API key is still constructed; callers check
/// `is_configured` and use canned responses instead.
#[derive(Clone)]
pub struct Providers {
    pub openai: OpenaiClient,
    pub gemini: GeminiClient,
    pub language: LanguageClient,
}

fn key_state(key: Option<&String>) -> &'static str {
    if key.is_some() { "set" } else { "unset" }
}

impl Providers {
    pub fn new(cfg: &Config) -> Result<Self, ProviderError> {
        let provider_defaults = &cfg.providers.defaults;
        let openai_cfg = Arc::new(cfg.openai());
        let gemini_cfg = Arc::new(cfg.gemini());

        // Log resolved provider configs here so `main` stays wiring-only.
        info!(
            providers_defaults_proxy = %provider_defaults.proxy.as_ref().map_or("<none>", url::Url::as_str),
            providers_defaults_enable_multiplexing = provider_defaults.enable_multiplexing,
            providers_defaults_timeout_secs = provider_defaults.timeout_secs,
            "Provider defaults loaded"
        );
        info!(
            openai_api_key = key_state(openai_cfg.api_key.as_ref()),
            openai_base_url = %openai_cfg.base_url,
            openai_model = %openai_cfg.model,
            openai_vision_model = %openai_cfg.vision_model,
            openai_image_model = %openai_cfg.image_model,
            openai_proxy = %openai_cfg.proxy.as_ref().map_or("<none>", url::Url::as_str),
            openai_enable_multiplexing = openai_cfg.enable_multiplexing,
            "OpenAI config (effective)"
        );
        info!(
            gemini_api_key = key_state(gemini_cfg.api_key.as_ref()),
            gemini_base_url = %gemini_cfg.base_url,
            gemini_language_url = %gemini_cfg.language_url,
            gemini_model = %gemini_cfg.model,
            gemini_proxy = %gemini_cfg.proxy.as_ref().map_or("<none>", url::Url::as_str),
            gemini_enable_multiplexing = gemini_cfg.enable_multiplexing,
            "Gemini config (effective)"
        );

        let openai_http = build_client(
            openai_cfg.proxy.as_ref(),
            openai_cfg.enable_multiplexing,
            openai_cfg.timeout,
        )?;
        let gemini_http = build_client(
            gemini_cfg.proxy.as_ref(),
            gemini_cfg.enable_multiplexing,
            gemini_cfg.timeout,
        )?;

        Ok(Self {
            openai: OpenaiClient::new(openai_cfg, openai_http),
            gemini: GeminiClient::new(gemini_cfg.clone(), gemini_http.clone()),
            language: LanguageClient::new(gemini_cfg, gemini_http),
        })
    }

    /// Completion provider for `model`, or `None` when no key is configured.
    pub fn completion_for(&self, model: Option<&str>) -> Option<SelectedCompletion> {
        select(&self.openai, &self.gemini, model)
    }
}
