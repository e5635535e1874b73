//! Google Cloud Natural Language `documents:analyzeSentiment` schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSentimentRequest {
    pub document: Document,
    pub encoding_type: String,
}

impl AnalyzeSentimentRequest {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            document: Document {
                r#type: "PLAIN_TEXT".to_string(),
                content: content.into(),
            },
            encoding_type: "UTF8".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub r#type: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSentimentResponse {
    pub document_sentiment: Sentiment,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sentiment {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub magnitude: f64,
}
