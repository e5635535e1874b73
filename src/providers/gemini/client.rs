use crate::config::GeminiResolvedConfig;
use crate::error::ProviderError;
use crate::providers::upstream::post_json;
use lumen_schema::ai::ChatTurn;
use lumen_schema::gemini::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use std::sync::Arc;
use tracing::info;

const CHANNEL: &str = "gemini";
pub(super) const API_KEY_HEADER: &str = "x-goog-api-key";

/// `models/{model}:generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    cfg: Arc<GeminiResolvedConfig>,
}

impl GeminiClient {
    pub fn new(cfg: Arc<GeminiResolvedConfig>, http: reqwest::Client) -> Self {
        Self { http, cfg }
    }

    pub fn is_configured(&self) -> bool {
        self.cfg.api_key.is_some()
    }

    pub fn default_model(&self) -> &str {
        &self.cfg.model
    }

    pub async fn generate(
        &self,
        model: &str,
        system: Option<&str>,
        turns: &[ChatTurn],
        max_output_tokens: Option<u32>,
    ) -> Result<String, ProviderError> {
        let api_key = self
            .cfg
            .api_key
            .as_deref()
            .ok_or(ProviderError::NotConfigured(CHANNEL))?;
        let url = self
            .cfg
            .base_url
            .join(&format!("models/{model}:generateContent"))?;

        let body = GenerateContentRequest {
            contents: turns.iter().map(Content::from).collect(),
            system_instruction: system.map(|text| Content::text(None, text)),
            generation_config: max_output_tokens.map(|max| GenerationConfig {
                max_output_tokens: Some(max),
                ..GenerationConfig::default()
            }),
        };
        info!(channel = CHANNEL, req.model = %model, "[Gemini] Post generateContent");

        let request = self.http.post(url).header(API_KEY_HEADER, api_key);
        let resp: GenerateContentResponse = post_json(CHANNEL, request, &body).await?;
        resp.first_text()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    #[test]
    fn model_path_joins_under_the_version_root() {
        let base = Url::parse("https://generativelanguage.googleapis.com/v1beta/").expect("url");
        let url = base
            .join("models/gemini-1.5-flash:generateContent")
            .expect("join");
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }
}
