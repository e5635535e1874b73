mod basic;
mod providers;
mod realtime;

pub use basic::BasicConfig;
pub use providers::{
    GeminiConfig, GeminiResolvedConfig, OpenaiConfig, OpenaiResolvedConfig, ProviderDefaults,
    ProvidersConfig,
};
pub use realtime::RealtimeConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Metrics broadcaster settings (see `realtime` table in config.toml).
    #[serde(default)]
    pub realtime: RealtimeConfig,

    /// AI provider settings (see `providers` table in config.toml).
    #[serde(default)]
    pub providers: ProvidersConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "LUMEN_";

impl Config {
    /// Builds a Figment that merges, in order of increasing priority:
    /// defaults, `config.toml` (if present), the well-known provider key variables
    /// (`OPENAI_API_KEY`, `GEMINI_API_KEY`) and `LUMEN_`-prefixed variables
    /// (`LUMEN_BASIC__LISTEN_PORT=8080`).
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment
            .merge(
                Env::raw()
                    .only(&["OPENAI_API_KEY"])
                    .map(|_| "providers.openai.api_key".into()),
            )
            .merge(
                Env::raw()
                    .only(&["GEMINI_API_KEY"])
                    .map(|_| "providers.gemini.api_key".into()),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts the layered configuration.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn openai(&self) -> OpenaiResolvedConfig {
        self.providers.openai.resolve(&self.providers.defaults)
    }

    pub fn gemini(&self) -> GeminiResolvedConfig {
        self.providers.gemini.resolve(&self.providers.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_extract_without_any_source() {
        let cfg: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .extract()
            .expect("defaults must extract");
        assert_eq!(cfg.basic.listen_port, 5000);
        assert!(cfg.basic.seed_demo_data);
        assert_eq!(cfg.realtime.interval_secs, 5);
        assert!(cfg.providers.openai.api_key.is_none());
    }

    #[test]
    fn toml_overrides_nested_provider_fields() {
        let cfg: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string(
                r#"
                [providers.defaults]
                timeout_secs = 5

                [providers.openai]
                api_key = "sk-test"
                model = "gpt-4o"
                "#,
            ))
            .extract()
            .expect("config must extract");

        let openai = cfg.openai();
        assert_eq!(openai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(openai.model, "gpt-4o");
        assert_eq!(openai.timeout.as_secs(), 5);
        assert!(cfg.gemini().api_key.is_none());
    }

    #[test]
    fn blank_api_keys_resolve_to_none() {
        let mut cfg = Config::default();
        cfg.providers.gemini.api_key = Some("   ".to_string());
        assert!(cfg.gemini().api_key.is_none());
    }
}
