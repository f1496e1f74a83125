pub mod handlers;
pub mod routes;
pub mod state;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::pkg::conf::Settings;
use crate::prelude::{Result, binderr, serveerr};
use routes::build_routes;
use state::AppState;

pub async fn listen(settings: &Settings) -> Result<()> {
    let app = build_routes(AppState::new(settings), &settings.write_signal_path);

    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr).await.map_err(binderr)?;
    let local = listener.local_addr().map_err(binderr)?;
    info!(addr = %local, path = %settings.write_signal_path, "server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(serveerr)?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for sigterm");
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
    info!("shutdown signal received");
}
