//! Server mode
//!
//! Builds the shared state, binds the listen address and serves the two
//! public routes until Ctrl+C.

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use tracing::info;

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::configure_routes;
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Upper bound on actix workers
const MAX_WORKERS: usize = 32;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(config);

    let index = startup.index.clone();
    let link_service = startup.link_service.clone();
    let shorten_settings = startup.shorten_settings.clone();

    let workers = config.server.cpu_count.clamp(1, MAX_WORKERS);
    let bind_address = config.server.address.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(link_service.clone()))
            .app_data(web::Data::new(shorten_settings.clone()))
            .app_data(shorten_settings.payload_config())
            .configure(configure_routes)
    })
    .workers(workers)
    .disable_signals()
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    info!(
        "Starting server at http://{} with {} worker(s)",
        bind_address, workers
    );

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        lifetime::shutdown::listen_for_shutdown().await;
        handle.stop(true).await;
    });

    server.await.context("HTTP server terminated with an error")?;

    lifetime::shutdown::report_shutdown(&index);
    Ok(())
}
