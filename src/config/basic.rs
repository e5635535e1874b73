use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Basic (core) configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BasicConfig {
    /// HTTP server listen address (e.g., "0.0.0.0", "127.0.0.1").
    /// TOML: `basic.listen_addr`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// HTTP server listen port.
    /// TOML: `basic.listen_port`. Default: `5000`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Log level for tracing subscriber initialization (e.g., "error", "warn", "info", "debug", "trace").
    /// TOML: `basic.loglevel`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Populate the store with the demo project and its children at start.
    /// TOML: `basic.seed_demo_data`. Default: `true`.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,

    /// Answer CORS preflights for any origin, so the dashboard can be served elsewhere.
    /// TOML: `basic.cors_allow_any_origin`. Default: `true`.
    #[serde(default = "default_true")]
    pub cors_allow_any_origin: bool,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_ip(),
            listen_port: default_listen_port(),
            loglevel: default_loglevel(),
            seed_demo_data: true,
            cors_allow_any_origin: true,
        }
    }
}

/// Default IP address for the HTTP server listen address.
fn default_listen_ip() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

/// Default port for the HTTP server.
fn default_listen_port() -> u16 {
    5000
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
