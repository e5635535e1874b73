use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metrics broadcaster configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RealtimeConfig {
    /// Seconds between `metrics_update` frames on each socket.
    /// TOML: `realtime.interval_secs`. Default: `5`.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Text of the one-off `connected` frame.
    /// TOML: `realtime.greeting`.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl RealtimeConfig {
    /// Interval between pushes; never shorter than 100ms.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs).max(Duration::from_millis(100))
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            greeting: default_greeting(),
        }
    }
}

fn default_interval_secs() -> u64 {
    5
}

fn default_greeting() -> String {
    "Connected to Lumen real-time metrics".to_string()
}
