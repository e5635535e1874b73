mod client;
mod language;

pub use client::GeminiClient;
pub use language::{LanguageClient, SentimentScore};
