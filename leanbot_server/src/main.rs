mod config;
mod error;
mod routes;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use leanbot_core::{BasicStrategy, Strategy};

use crate::config::Config;
use crate::routes::{AppState, SharedState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let state = SharedState::new(AppState::new(BasicStrategy));
    let version = state.strategy.version().to_string();
    let app = routes::router(state);

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!("服务器正在监听 {} ({})", addr, version);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已停止 {}", addr);
    Ok(())
}

/// 等待 Ctrl-C，收到后开始优雅关闭
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // 无法监听信号时一直运行下去
        warn!("无法监听关闭信号: {}", e);
        std::future::pending::<()>().await;
    }
}
