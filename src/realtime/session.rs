use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use lumen_schema::RealtimeMessage;
use tokio::time::{MissedTickBehavior, interval_at};
use tracing::{debug, warn};

use super::{Broadcaster, random_snapshot};

/// Drives one accepted socket until the client leaves or a send fails.
pub async fn run_session(socket: WebSocket, broadcaster: Broadcaster) {
    let guard = broadcaster.registry.register();
    let connection_id = guard.id();
    let (mut sender, mut receiver) = socket.split();

    let hello = RealtimeMessage::Connected {
        message: broadcaster.greeting.to_string(),
    };
    if let Err(e) = send_frame(&mut sender, &hello).await {
        debug!(%connection_id, error = %e, "Failed to send greeting; dropping socket");
        return;
    }

    let period = broadcaster.interval;
    let mut ticker = interval_at(tokio::time::Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let frame = RealtimeMessage::MetricsUpdate { data: random_snapshot() };
                if let Err(e) = send_frame(&mut sender, &frame).await {
                    debug!(%connection_id, error = %e, "Metrics push failed; closing session");
                    break;
                }
            }
            inbound = receiver.next() => match inbound {
                Some(Ok(Message::Close(_))) | None => {
                    debug!(%connection_id, "Client closed WebSocket");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(%connection_id, error = %e, "WebSocket receive error");
                    break;
                }
            },
        }
    }

    drop(guard);
}

async fn send_frame<S>(sender: &mut S, frame: &RealtimeMessage) -> Result<(), axum::Error>
where
    S: futures::Sink<Message, Error = axum::Error> + Unpin,
{
    let text = serde_json::to_string(frame).map_err(axum::Error::new)?;
    sender.send(Message::Text(text.into())).await
}
