use serde::{Deserialize, Serialize};

use super::ChatTurn;

/// Which backend produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiSource {
    Openai,
    Gemini,
    GoogleLanguage,
    /// Deterministic canned response; no provider was called or the call failed.
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCode {
    pub code: String,
    pub language: String,
    pub source: AiSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSql {
    pub sql: String,
    pub source: AiSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    const THRESHOLD: f64 = 0.25;

    pub fn from_score(score: f64) -> Self {
        if score > Self::THRESHOLD {
            SentimentLabel::Positive
        } else if score < -Self::THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub sentiment: SentimentLabel,
    /// In `[-1.0, 1.0]`.
    pub score: f64,
    pub magnitude: f64,
    pub source: AiSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: ChatTurn,
    pub model: String,
    pub source: AiSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
    pub source: AiSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub analysis: String,
    pub source: AiSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
    pub source: AiSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_tags_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&AiSource::GoogleLanguage).expect("serialize"),
            "\"google-language\""
        );
        assert_eq!(
            serde_json::to_string(&AiSource::Openai).expect("serialize"),
            "\"openai\""
        );
    }

    #[test]
    fn sentiment_label_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.8), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.25), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.3), SentimentLabel::Negative);
    }
}
