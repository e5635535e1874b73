use crate::realtime::run_session;
use crate::server::router::LumenState;
use axum::{
    Json, Router,
    extract::{State, WebSocketUpgrade},
    response::Response,
    routing::get,
};
use serde::Serialize;

pub fn router() -> Router<LumenState> {
    Router::new()
        .route("/ws", get(ws_upgrade))
        .route("/api/realtime/status", get(realtime_status))
}

async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<LumenState>) -> Response {
    let broadcaster = state.realtime.clone();
    ws.on_upgrade(move |socket| run_session(socket, broadcaster))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RealtimeStatus {
    active_connections: usize,
    interval_ms: u64,
}

async fn realtime_status(State(state): State<LumenState>) -> Json<RealtimeStatus> {
    Json(RealtimeStatus {
        active_connections: state.realtime.active_connections(),
        interval_ms: u64::try_from(state.realtime.interval.as_millis()).unwrap_or(u64::MAX),
    })
}
