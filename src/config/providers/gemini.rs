use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::{ProviderDefaults, non_blank};

/// Gemini / Google Natural Language configuration managed by Figment.
///
/// One key serves both APIs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key. Env: `GEMINI_API_KEY`. Unset selects canned responses.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Generative Language API root (keep the trailing slash).
    /// TOML: `providers.gemini.base_url`.
    /// Default: `https://generativelanguage.googleapis.com/v1beta/`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// Cloud Natural Language API root (keep the trailing slash).
    /// TOML: `providers.gemini.language_url`. Default: `https://language.googleapis.com/v1/`.
    #[serde(default = "default_language_url")]
    pub language_url: Url,

    /// Model used when the request selects Gemini without a concrete model.
    /// TOML: `providers.gemini.model`. Default: `gemini-1.5-flash`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Optional upstream HTTP proxy.
    /// TOML: `providers.gemini.proxy`. Falls back to `providers.defaults.proxy`.
    #[serde(default)]
    pub proxy: Option<Url>,

    /// TOML: `providers.gemini.enable_multiplexing`.
    /// Falls back to `providers.defaults.enable_multiplexing`.
    #[serde(default)]
    pub enable_multiplexing: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct GeminiResolvedConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub language_url: Url,
    pub model: String,
    pub proxy: Option<Url>,
    pub enable_multiplexing: bool,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn resolve(&self, defaults: &ProviderDefaults) -> GeminiResolvedConfig {
        GeminiResolvedConfig {
            api_key: non_blank(self.api_key.as_ref()),
            base_url: self.base_url.clone(),
            language_url: self.language_url.clone(),
            model: self.model.clone(),
            proxy: self.proxy.clone().or_else(|| defaults.proxy.clone()),
            enable_multiplexing: self
                .enable_multiplexing
                .unwrap_or(defaults.enable_multiplexing),
            timeout: Duration::from_secs(defaults.timeout_secs),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            language_url: default_language_url(),
            model: default_model(),
            proxy: None,
            enable_multiplexing: None,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/").expect("static url is valid")
}

fn default_language_url() -> Url {
    Url::parse("https://language.googleapis.com/v1/").expect("static url is valid")
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}
