use lumen::config::Config;
use lumen::providers::Providers;
use lumen::realtime::Broadcaster;
use lumen::server::{LumenState, lumen_router};
use lumen::service::AiService;
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        listen_addr = %cfg.basic.listen_addr,
        listen_port = cfg.basic.listen_port,
        loglevel = %cfg.basic.loglevel,
        seed_demo_data = cfg.basic.seed_demo_data,
        cors_allow_any_origin = cfg.basic.cors_allow_any_origin,
        realtime_interval_secs = cfg.realtime.interval_secs,
        "Basic config loaded"
    );

    let store = lumen::store::spawn(cfg.basic.seed_demo_data).await?;
    let providers = Providers::new(&cfg)?;
    let ai = AiService::new(providers, store.clone());
    let realtime = Broadcaster::new(&cfg.realtime);

    let state = LumenState::new(store, ai, realtime);
    let app = lumen_router(state, cfg.basic.cors_allow_any_origin);

    let addr = SocketAddr::from((cfg.basic.listen_addr, cfg.basic.listen_port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
