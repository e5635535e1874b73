//! Messages pushed over the `/ws` metrics channel.

use serde::{Deserialize, Serialize};

/// Server-to-client frames. There is no client-to-server protocol.
///
/// Wire shape: `{"type":"connected","message":"..."}` and
/// `{"type":"metrics_update","data":{...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RealtimeMessage {
    Connected { message: String },
    MetricsUpdate { data: MetricsSnapshot },
}

/// Simulated service counters. Values are random and carry no history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub connections: u32,
    pub queries_per_min: u32,
    /// Percent, two decimals.
    pub uptime: f64,
    /// Milliseconds.
    pub response_time: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn frames_use_snake_case_type_tags() {
        let connected = RealtimeMessage::Connected {
            message: "hi".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&connected).expect("serialize"),
            json!({ "type": "connected", "message": "hi" })
        );

        let update = RealtimeMessage::MetricsUpdate {
            data: MetricsSnapshot {
                connections: 60,
                queries_per_min: 1200,
                uptime: 99.95,
                response_time: 42,
            },
        };
        let value = serde_json::to_value(&update).expect("serialize");
        assert_eq!(value["type"], "metrics_update");
        assert_eq!(value["data"]["queries_per_min"], 1200);
        assert_eq!(value["data"]["response_time"], 42);
    }
}
