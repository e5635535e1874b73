use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::{ProviderDefaults, non_blank};

/// OpenAI provider configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenaiConfig {
    /// API key. Env: `OPENAI_API_KEY`. Unset selects canned responses.
    #[serde(default)]
    pub api_key: Option<String>,

    /// API root; endpoint paths are joined onto it, so keep the trailing slash.
    /// TOML: `providers.openai.base_url`. Default: `https://api.openai.com/v1/`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// Chat model used when the request names none.
    /// TOML: `providers.openai.model`. Default: `gpt-4o-mini`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Model used by `analyze-image`.
    /// TOML: `providers.openai.vision_model`. Default: `gpt-4o`.
    #[serde(default = "default_vision_model")]
    pub vision_model: String,

    /// Model used by `generate-image`.
    /// TOML: `providers.openai.image_model`. Default: `dall-e-3`.
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Optional upstream HTTP proxy.
    /// TOML: `providers.openai.proxy`. Falls back to `providers.defaults.proxy`.
    #[serde(default)]
    pub proxy: Option<Url>,

    /// Allow HTTP/2 multiplexing for reqwest clients; disabled forces HTTP/1.
    /// TOML: `providers.openai.enable_multiplexing`.
    /// Falls back to `providers.defaults.enable_multiplexing`.
    #[serde(default)]
    pub enable_multiplexing: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct OpenaiResolvedConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub model: String,
    pub vision_model: String,
    pub image_model: String,
    pub proxy: Option<Url>,
    pub enable_multiplexing: bool,
    pub timeout: Duration,
}

impl OpenaiConfig {
    pub fn resolve(&self, defaults: &ProviderDefaults) -> OpenaiResolvedConfig {
        OpenaiResolvedConfig {
            api_key: non_blank(self.api_key.as_ref()),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            vision_model: self.vision_model.clone(),
            image_model: self.image_model.clone(),
            proxy: self.proxy.clone().or_else(|| defaults.proxy.clone()),
            enable_multiplexing: self
                .enable_multiplexing
                .unwrap_or(defaults.enable_multiplexing),
            timeout: Duration::from_secs(defaults.timeout_secs),
        }
    }
}

impl Default for OpenaiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            vision_model: default_vision_model(),
            image_model: default_image_model(),
            proxy: None,
            enable_multiplexing: None,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.openai.com/v1/").expect("static url is valid")
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_vision_model() -> String {
    "gpt-4o".to_string()
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}
