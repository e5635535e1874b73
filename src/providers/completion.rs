use crate::error::ProviderError;
use lumen_schema::ai::{AiSource, ChatTurn};
use lumen_schema::openai::RequestMessage;

use super::gemini::GeminiClient;
use super::openai::OpenaiClient;

/// A text completion routed to whichever provider was selected.
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub system: Option<&'a str>,
    pub turns: &'a [ChatTurn],
    pub max_tokens: Option<u32>,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(turns: &'a [ChatTurn]) -> Self {
        Self {
            system: None,
            turns,
            max_tokens: None,
        }
    }

    #[must_use]
    pub fn with_system(mut self, system: Option<&'a str>) -> Self {
        self.system = system;
        self
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[derive(Clone)]
pub enum CompletionProvider {
    OpenAi(OpenaiClient),
    Gemini(GeminiClient),
}

/// Provider plus the model it will be asked for.
#[derive(Clone)]
pub struct SelectedCompletion {
    pub provider: CompletionProvider,
    pub model: String,
}

impl CompletionProvider {
    pub fn source(&self) -> AiSource {
        match self {
            CompletionProvider::OpenAi(_) => AiSource::Openai,
            CompletionProvider::Gemini(_) => AiSource::Gemini,
        }
    }

    fn is_configured(&self) -> bool {
        match self {
            CompletionProvider::OpenAi(client) => client.is_configured(),
            CompletionProvider::Gemini(client) => client.is_configured(),
        }
    }

    fn default_model(&self) -> &str {
        match self {
            CompletionProvider::OpenAi(client) => client.default_model(),
            CompletionProvider::Gemini(client) => client.default_model(),
        }
    }

    pub async fn complete(
        &self,
        model: &str,
        request: &CompletionRequest<'_>,
    ) -> Result<String, ProviderError> {
        match self {
            CompletionProvider::OpenAi(client) => {
                let mut messages = Vec::with_capacity(request.turns.len() + 1);
                if let Some(system) = request.system {
                    messages.push(RequestMessage::from(&ChatTurn::system(system)));
                }
                messages.extend(request.turns.iter().map(RequestMessage::from));
                client.chat(model, messages, request.max_tokens).await
            }
            CompletionProvider::Gemini(client) => {
                client
                    .generate(model, request.system, request.turns, request.max_tokens)
                    .await
            }
        }
    }
}

/// Model name without the optional `models/` resource prefix Google uses.
pub fn canonical_model(model: &str) -> &str {
    model.strip_prefix("models/").unwrap_or(model)
}

/// Whether a model name belongs to the Gemini family.
pub fn is_gemini_model(model: &str) -> bool {
    canonical_model(model)
        .to_ascii_lowercase()
        .starts_with("gemini")
}

/// Pick a provider for `model`.
///
/// The model's own family is preferred. When that provider has no key the other one is
/// used with its default model. The returned model is canonical. `None` when neither
/// is configured.
pub fn select(
    openai: &OpenaiClient,
    gemini: &GeminiClient,
    model: Option<&str>,
) -> Option<SelectedCompletion> {
    let openai = CompletionProvider::OpenAi(openai.clone());
    let gemini = CompletionProvider::Gemini(gemini.clone());
    let (preferred, other) = match model {
        Some(m) if is_gemini_model(m) => (gemini, openai),
        _ => (openai, gemini),
    };

    if preferred.is_configured() {
        let model = canonical_model(model.unwrap_or(preferred.default_model())).to_string();
        return Some(SelectedCompletion {
            provider: preferred,
            model,
        });
    }
    if other.is_configured() {
        let model = canonical_model(other.default_model()).to_string();
        return Some(SelectedCompletion {
            provider: other,
            model,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::sync::Arc;

    fn clients(openai_key: Option<&str>, gemini_key: Option<&str>) -> (OpenaiClient, GeminiClient) {
        let mut cfg = Config::default();
        cfg.providers.openai.api_key = openai_key.map(str::to_string);
        cfg.providers.gemini.api_key = gemini_key.map(str::to_string);
        let http = reqwest::Client::new();
        (
            OpenaiClient::new(Arc::new(cfg.openai()), http.clone()),
            GeminiClient::new(Arc::new(cfg.gemini()), http),
        )
    }

    #[test]
    fn gemini_prefix_selects_gemini() {
        assert!(is_gemini_model("gemini-1.5-pro"));
        assert!(is_gemini_model("models/gemini-2.0-flash"));
        assert!(!is_gemini_model("gpt-4o-mini"));
    }

    #[test]
    fn preferred_provider_keeps_requested_model() {
        let (openai, gemini) = clients(Some("sk"), Some("g"));
        let selected = select(&openai, &gemini, Some("gemini-1.5-pro")).expect("selected");
        assert_eq!(selected.provider.source(), AiSource::Gemini);
        assert_eq!(selected.model, "gemini-1.5-pro");

        let selected = select(&openai, &gemini, None).expect("selected");
        assert_eq!(selected.provider.source(), AiSource::Openai);
        assert_eq!(selected.model, "gpt-4o-mini");
    }

    #[test]
    fn resource_prefixed_models_are_canonicalized() {
        let (openai, gemini) = clients(Some("sk"), Some("g"));
        let selected = select(&openai, &gemini, Some("models/gemini-2.0-flash")).expect("selected");
        assert_eq!(selected.provider.source(), AiSource::Gemini);
        assert_eq!(selected.model, "gemini-2.0-flash");
    }

    #[test]
    fn unconfigured_preference_falls_over_to_other_default_model() {
        let (openai, gemini) = clients(None, Some("g"));
        let selected = select(&openai, &gemini, Some("gpt-4o")).expect("selected");
        assert_eq!(selected.provider.source(), AiSource::Gemini);
        assert_eq!(selected.model, "gemini-1.5-flash");
    }

    #[test]
    fn nothing_configured_selects_nothing() {
        let (openai, gemini) = clients(None, None);
        assert!(select(&openai, &gemini, Some("gpt-4o")).is_none());
    }
}
