mod cli;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use movies_core::{MovieInfo, Repository};
use movies_info_service::http::{App, AppState};
use movies_info_service::CatalogService;
use movies_storage::{InMemoryRepository, MongoRepository};
use movies_telemetry::TelemetryConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;

    let _telemetry = movies_telemetry::init(
        TelemetryConfig::builder()
            .service_name("movies-info")
            .log_format(config.log_format.into())
            .otlp_endpoint(config.otlp_endpoint.clone())
            .build(),
    )?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting movie info server"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(config.listen_addr, InMemoryRepository::<MovieInfo>::new()).await?;
        }
        StorageBackendArg::Mongodb => {
            let mongodb_uri = config
                .mongodb_uri
                .ok_or("mongodb uri is required when storage backend is mongodb")?;
            let repository =
                MongoRepository::<MovieInfo>::connect(&mongodb_uri, &config.mongodb_database)
                    .await?;
            repository.ensure_index().await?;
            run_server(config.listen_addr, repository).await?;
        }
    }

    Ok(())
}

async fn run_server<R: Repository<MovieInfo>>(
    listen_addr: SocketAddr,
    repository: R,
) -> Result<(), std::io::Error> {
    let state = AppState::new(Arc::new(CatalogService::new(repository)));

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down");
}
