use std::net::SocketAddr;
use std::sync::Arc;

use axum::{serve, Extension};
use club_booking::{
    api,
    infrastructure::{config::Config, state::AppState},
    telemetry,
};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Arc::new(Config::from_env()?);
    telemetry::init(&config.telemetry);

    let state = Arc::new(AppState::new(Arc::clone(&config)));
    info!(
        rest_endpoints = state.rest.endpoints().len(),
        graphql_operations = state.graphql.operations().len(),
        "route registries loaded"
    );

    let router = api::build_router(Arc::clone(&config)).layer(Extension(state));

    let addr: SocketAddr = config.bind_address().parse()?;
    info!(%addr, graphql_path = %config.api.graphql_path, "starting club booking api");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let server = serve(listener, router.into_make_service());

    tokio::select! {
        res = server => {
            if let Err(err) = res {
                warn!(error = ?err, "server exited with error");
            }
        }
        _ = shutdown_signal() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = ?err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = ?err, "failed to install SIGTERM handler");
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
}
