use crate::config::OpenaiResolvedConfig;
use crate::error::ProviderError;
use crate::providers::upstream::post_json;
use lumen_schema::openai::{
    ChatCompletionRequest, ChatCompletionResponse, ContentPart, ImageGenerationRequest,
    ImageGenerationResponse, ImageUrl, MessageContent, RequestMessage,
};
use lumen_schema::ai::ChatRole;
use std::sync::Arc;
use tracing::info;

const CHANNEL: &str = "openai";

/// Chat completions, vision and image generation against an OpenAI-compatible API.
#[derive(Clone)]
pub struct OpenaiClient {
    http: reqwest::Client,
    cfg: Arc<OpenaiResolvedConfig>,
}

/// First image of a generation call.
#[derive(Debug, Clone)]
pub struct GeneratedImageUrl {
    pub url: String,
    pub revised_prompt: Option<String>,
}

impl OpenaiClient {
    pub fn new(cfg: Arc<OpenaiResolvedConfig>, http: reqwest::Client) -> Self {
        Self { http, cfg }
    }

    pub fn is_configured(&self) -> bool {
        self.cfg.api_key.is_some()
    }

    pub fn default_model(&self) -> &str {
        &self.cfg.model
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.cfg
            .api_key
            .as_deref()
            .ok_or(ProviderError::NotConfigured(CHANNEL))
    }

    fn post(&self, path: &str) -> Result<reqwest::RequestBuilder, ProviderError> {
        let url = self.cfg.base_url.join(path)?;
        Ok(self.http.post(url).bearer_auth(self.api_key()?))
    }

    /// Returns the first non-blank completion text.
    pub async fn chat(
        &self,
        model: &str,
        messages: Vec<RequestMessage>,
        max_tokens: Option<u32>,
    ) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: model.to_string(),
            messages,
            max_tokens,
            temperature: None,
        };
        info!(channel = CHANNEL, req.model = %model, "[OpenAI] Post chat/completions");

        let resp: ChatCompletionResponse =
            post_json(CHANNEL, self.post("chat/completions")?, &body).await?;
        resp.first_text()
            .map(str::to_string)
            .ok_or(ProviderError::EmptyCompletion)
    }

    /// Describe an image with the vision model.
    pub async fn describe_image(
        &self,
        image_url: String,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let message = RequestMessage {
            role: ChatRole::User,
            content: MessageContent::Parts(vec![
                ContentPart::Text {
                    text: prompt.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: image_url },
                },
            ]),
        };
        let model = self.cfg.vision_model.clone();
        self.chat(&model, vec![message], Some(500)).await
    }

    pub async fn generate_image(
        &self,
        prompt: &str,
        size: &str,
    ) -> Result<GeneratedImageUrl, ProviderError> {
        let body = ImageGenerationRequest {
            model: self.cfg.image_model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: size.to_string(),
        };
        info!(
            channel = CHANNEL,
            req.model = %body.model,
            req.size = %size,
            "[OpenAI] Post images/generations"
        );

        let resp: ImageGenerationResponse =
            post_json(CHANNEL, self.post("images/generations")?, &body).await?;
        let first = resp
            .data
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyCompletion)?;
        let url = match (first.url, first.b64_json) {
            (Some(url), _) if !url.is_empty() => url,
            (_, Some(b64)) if !b64.is_empty() => format!("data:image/png;base64,{b64}"),
            _ => return Err(ProviderError::EmptyCompletion),
        };
        Ok(GeneratedImageUrl {
            url,
            revised_prompt: first.revised_prompt,
        })
    }
}
