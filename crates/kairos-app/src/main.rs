use std::sync::Arc;

use kairos_app::app::api::routes;
use kairos_app::config::ConfigHandler;
use kairos_app::service_handler::CalendarServiceHandler;
use kairos_core::config::load_config;
use kairos_service::calendar::CalendarService;
use kairos_store::store::MemoryEventStore;
use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Kairos calendar server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let service = CalendarService::new(Arc::new(MemoryEventStore::new()), &config.calendar);

    tracing::info!(
        max_occurrences = config.calendar.max_occurrences,
        "Calendar service ready"
    );

    let bind_addr = config.server.bind_address();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(CalendarServiceHandler {
            service: Arc::new(service),
        })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
