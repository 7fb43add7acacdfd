use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use kubedash_core::app_state::build_app_state;
use kubedash_core::config::AppConfig;
use kubedash_core::core::client::kube_client::build_kube_client;
use kubedash_core::logging::init_logging;
use kubedash_core::routes::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = init_logging(config.log_dir.as_deref());

    if config.uses_default_password() {
        warn!("Dashboard admin is using the default password; set DASHBOARD_ADMIN_PASSWORD");
    }
    if !config.metrics_enabled {
        info!("Metrics collection disabled, metric endpoints will report unavailable");
    }

    let client = build_kube_client().await?;
    let listen_addr = config.listen_addr();
    let state = build_app_state(config, client)?;

    let app = app_router(state);

    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", listen_addr))?;
    info!("kubedash-core listening on {}", listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
