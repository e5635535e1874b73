mod gemini;
mod openai;

pub use gemini::{GeminiConfig, GeminiResolvedConfig};
pub use openai::{OpenaiConfig, OpenaiResolvedConfig};

use serde::{Deserialize, Serialize};
use url::Url;

/// Global provider defaults (used when provider-level config is unset).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderDefaults {
    /// Optional upstream HTTP proxy. If set, used for reqwest clients.
    /// TOML: `providers.defaults.proxy`. Example: `http://127.0.0.1:1080`.
    #[serde(default)]
    pub proxy: Option<Url>,

    /// Allow HTTP/2 multiplexing for reqwest clients; disabled forces HTTP/1.
    /// TOML: `providers.defaults.enable_multiplexing`. Default: `false`.
    #[serde(default = "default_enable_multiplexing")]
    pub enable_multiplexing: bool,

    /// Total timeout for a single upstream call, in seconds.
    /// TOML: `providers.defaults.timeout_secs`. Default: `60`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderDefaults {
    fn default() -> Self {
        Self {
            proxy: None,
            enable_multiplexing: default_enable_multiplexing(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// All provider configurations.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProvidersConfig {
    /// Global defaults for providers (overridden per provider if set).
    #[serde(default)]
    pub defaults: ProviderDefaults,

    /// OpenAI (chat completions, vision, images).
    #[serde(default)]
    pub openai: OpenaiConfig,

    /// Google Gemini and Natural Language.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Treats blank keys as unset so an empty `OPENAI_API_KEY=` selects the fallback.
pub(super) fn non_blank(key: Option<&String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

fn default_enable_multiplexing() -> bool {
    false
}

fn default_timeout_secs() -> u64 {
    60
}
