use lumen_schema::MetricsSnapshot;
use rand::Rng;

/// Simulated dashboard figures for one `metrics_update` frame.
pub fn random_snapshot() -> MetricsSnapshot {
    let mut rng = rand::rng();
    let uptime: f64 = rng.random_range(99.90..=100.0);
    MetricsSnapshot {
        connections: rng.random_range(50..150),
        queries_per_min: rng.random_range(1000..5000),
        uptime: (uptime * 100.0).round() / 100.0,
        response_time: rng.random_range(20..120),
    }
}
