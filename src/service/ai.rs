use lumen_schema::AiAssistant;
use lumen_schema::ai::{
    AiSource, AnalyzeImageRequest, ChatRequest, ChatResponse, ChatTurn, GenerateCodeRequest,
    GenerateImageRequest, GenerateSqlRequest, GeneratedCode, GeneratedImage, GeneratedSql,
    ImageAnalysis, SentimentAnalysis, SentimentLabel, SentimentRequest, SummarizeRequest,
    Summary,
};
use tracing::{debug, warn};

use super::prompts;
use crate::error::{LumenError, ProviderError};
use crate::providers::{CompletionRequest, Providers, fallback};
use crate::store::StoreHandle;

/// Backs the `/api/ai/*` routes.
///
/// Each operation tries the selected provider once and answers with the canned
/// response when no key is configured or the call fails. Provider errors are
/// logged, never returned.
#[derive(Clone)]
pub struct AiService {
    providers: Providers,
    store: StoreHandle,
}

struct Completed {
    text: String,
    model: String,
    source: AiSource,
}

fn log_provider_failure(op: &'static str, source: AiSource, error: &ProviderError) {
    warn!(
        op,
        ?source,
        error.kind = error.kind(),
        error = %error,
        "AI provider call failed; serving canned response"
    );
}

impl AiService {
    pub fn new(providers: Providers, store: StoreHandle) -> Self {
        Self { providers, store }
    }

    /// One completion through the provider chosen for `model`; `None` means fall back.
    async fn complete(
        &self,
        op: &'static str,
        model: Option<&str>,
        request: CompletionRequest<'_>,
    ) -> Option<Completed> {
        let Some(selected) = self.providers.completion_for(model) else {
            debug!(op, "No AI provider configured; serving canned response");
            return None;
        };
        let source = selected.provider.source();
        match selected.provider.complete(&selected.model, &request).await {
            Ok(text) => Some(Completed {
                text,
                model: selected.model,
                source,
            }),
            Err(e) => {
                log_provider_failure(op, source, &e);
                None
            }
        }
    }

    pub async fn generate_code(&self, req: &GenerateCodeRequest) -> GeneratedCode {
        let language = fallback::normalize_language(req.language.as_deref());
        let system = prompts::code_system(language);
        let turns = [ChatTurn::user(req.prompt.as_str())];
        let request = CompletionRequest::new(&turns)
            .with_system(Some(system.as_str()))
            .with_max_tokens(1500);

        match self.complete("generate-code", None, request).await {
            Some(done) => GeneratedCode {
                code: prompts::strip_code_fences(&done.text),
                language: language.to_string(),
                source: done.source,
            },
            None => GeneratedCode {
                code: fallback::code_template(&req.prompt, language),
                language: language.to_string(),
                source: AiSource::Fallback,
            },
        }
    }

    pub async fn generate_sql(&self, req: &GenerateSqlRequest) -> GeneratedSql {
        let system = prompts::sql_system(req.schema.as_deref());
        let turns = [ChatTurn::user(req.prompt.as_str())];
        let request = CompletionRequest::new(&turns)
            .with_system(Some(system.as_str()))
            .with_max_tokens(500);

        match self.complete("generate-sql", None, request).await {
            Some(done) => GeneratedSql {
                sql: prompts::strip_code_fences(&done.text),
                source: done.source,
            },
            None => GeneratedSql {
                sql: fallback::sql_for(&req.prompt),
                source: AiSource::Fallback,
            },
        }
    }

    pub async fn analyze_sentiment(&self, req: &SentimentRequest) -> SentimentAnalysis {
        if self.providers.language.is_configured() {
            match self.providers.language.analyze_sentiment(&req.text).await {
                Ok(scored) => {
                    return SentimentAnalysis {
                        sentiment: SentimentLabel::from_score(scored.score),
                        score: scored.score,
                        magnitude: scored.magnitude,
                        source: AiSource::GoogleLanguage,
                    };
                }
                Err(e) => log_provider_failure("analyze-sentiment", AiSource::GoogleLanguage, &e),
            }
        }

        let (sentiment, score, magnitude) = fallback::lexicon_sentiment(&req.text);
        SentimentAnalysis {
            sentiment,
            score,
            magnitude,
            source: AiSource::Fallback,
        }
    }

    /// Chat with an optional stored assistant.
    ///
    /// An `assistantId` must name an existing assistant; its model and system prompt
    /// apply unless the request names a model itself.
    pub async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse, LumenError> {
        let assistant = match req.assistant_id {
            Some(id) => Some(self.store.get::<AiAssistant>(id).await?),
            None => None,
        };
        let model = req
            .model
            .as_deref()
            .or(assistant.as_ref().map(|a| a.model.as_str()));
        let system = assistant
            .as_ref()
            .and_then(AiAssistant::system_prompt)
            .unwrap_or(prompts::CHAT_SYSTEM);

        let request = CompletionRequest::new(&req.messages)
            .with_system(Some(system))
            .with_max_tokens(1000);

        let response = match self.complete("chat", model, request).await {
            Some(done) => ChatResponse {
                message: ChatTurn::assistant(done.text),
                model: done.model,
                source: done.source,
            },
            None => ChatResponse {
                message: ChatTurn::assistant(fallback::chat_reply(
                    req.last_user_message().unwrap_or_default(),
                )),
                model: model
                    .unwrap_or(self.providers.openai.default_model())
                    .to_string(),
                source: AiSource::Fallback,
            },
        };
        Ok(response)
    }

    pub async fn summarize(&self, req: &SummarizeRequest) -> Summary {
        let max_length = req.max_length.unwrap_or(fallback::DEFAULT_MAX_LENGTH);
        let system = prompts::summarize_system(max_length);
        let turns = [ChatTurn::user(req.text.as_str())];
        let request = CompletionRequest::new(&turns).with_system(Some(system.as_str()));

        match self.complete("summarize", None, request).await {
            Some(done) => Summary {
                summary: done.text,
                source: done.source,
            },
            None => Summary {
                summary: fallback::summarize(&req.text, max_length),
                source: AiSource::Fallback,
            },
        }
    }

    pub async fn analyze_image(&self, req: &AnalyzeImageRequest) -> ImageAnalysis {
        let prompt = req
            .prompt
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        if self.providers.openai.is_configured() {
            let result = self
                .providers
                .openai
                .describe_image(req.image_url(), prompt.unwrap_or(prompts::DEFAULT_IMAGE_PROMPT))
                .await;
            match result {
                Ok(analysis) => {
                    return ImageAnalysis {
                        analysis,
                        source: AiSource::Openai,
                    };
                }
                Err(e) => log_provider_failure("analyze-image", AiSource::Openai, &e),
            }
        }

        ImageAnalysis {
            analysis: fallback::image_analysis(prompt),
            source: AiSource::Fallback,
        }
    }

    pub async fn generate_image(&self, req: &GenerateImageRequest) -> GeneratedImage {
        if self.providers.openai.is_configured() {
            match self
                .providers
                .openai
                .generate_image(&req.prompt, req.size())
                .await
            {
                Ok(image) => {
                    return GeneratedImage {
                        url: image.url,
                        revised_prompt: image.revised_prompt,
                        source: AiSource::Openai,
                    };
                }
                Err(e) => log_provider_failure("generate-image", AiSource::Openai, &e),
            }
        }

        GeneratedImage {
            url: fallback::placeholder_image_url(&req.prompt, req.size()),
            revised_prompt: None,
            source: AiSource::Fallback,
        }
    }
}
