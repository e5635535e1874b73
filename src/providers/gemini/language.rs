use crate::config::GeminiResolvedConfig;
use crate::error::ProviderError;
use crate::providers::upstream::post_json;
use lumen_schema::google_language::{AnalyzeSentimentRequest, AnalyzeSentimentResponse};
use std::sync::Arc;
use tracing::info;

use super::client::API_KEY_HEADER;

const CHANNEL: &str = "google-language";

/// Google Cloud Natural Language sentiment, keyed by the Gemini API key.
#[derive(Clone)]
pub struct LanguageClient {
    http: reqwest::Client,
    cfg: Arc<GeminiResolvedConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub score: f64,
    pub magnitude: f64,
}

impl LanguageClient {
    pub fn new(cfg: Arc<GeminiResolvedConfig>, http: reqwest::Client) -> Self {
        Self { http, cfg }
    }

    pub fn is_configured(&self) -> bool {
        self.cfg.api_key.is_some()
    }

    pub async fn analyze_sentiment(&self, text: &str) -> Result<SentimentScore, ProviderError> {
        let api_key = self
            .cfg
            .api_key
            .as_deref()
            .ok_or(ProviderError::NotConfigured(CHANNEL))?;
        // Leading "./" keeps the colon from parsing as a URL scheme.
        let url = self.cfg.language_url.join("./documents:analyzeSentiment")?;
        info!(channel = CHANNEL, chars = text.chars().count(), "[Language] Post analyzeSentiment");

        let request = self.http.post(url).header(API_KEY_HEADER, api_key);
        let resp: AnalyzeSentimentResponse =
            post_json(CHANNEL, request, &AnalyzeSentimentRequest::plain_text(text)).await?;
        Ok(SentimentScore {
            score: resp.document_sentiment.score.clamp(-1.0, 1.0),
            magnitude: resp.document_sentiment.magnitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    #[test]
    fn colon_path_stays_relative() {
        let base = Url::parse("https://language.googleapis.com/v1/").expect("url");
        let url = base.join("./documents:analyzeSentiment").expect("join");
        assert_eq!(
            url.as_str(),
            "https://language.googleapis.com/v1/documents:analyzeSentiment"
        );
    }
}
