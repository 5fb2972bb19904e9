//! # roomwatchd — room telemetry daemon
//!
//! Composition root that wires the HTTP client, the poller and the optional
//! demo service together.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize `tracing` logging
//! - Optionally start the demo readings service and point the client at it
//! - Construct the HTTP telemetry client (adapter)
//! - Mount the poller with the configured room and today's date
//! - Log every published snapshot
//! - Change the selection from stdin commands (`room 107`, `date 2026-10-15`)
//! - Unmount on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod commands;
mod config;
mod view;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use roomwatch_adapter_demo_axum::router;
use roomwatch_adapter_demo_axum::state::DemoState;
use roomwatch_adapter_http_reqwest::HttpTelemetryClient;
use roomwatch_app::poller::RoomTelemetryPoller;
use roomwatch_domain::selection::Selection;
use roomwatch_domain::time::today;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let poller_config = config.poller_config()?;

    // Demo service
    if config.demo.enabled {
        let listener = tokio::net::TcpListener::bind(config.demo_addr()?)
            .await
            .context("failed to bind demo service")?;
        let addr = listener.local_addr()?;
        let app = router::build(DemoState::new(poller_config.catalog.clone()));
        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!(%err, "demo service stopped");
            }
        });
        tracing::info!(%addr, "demo service listening");
        config.api.base_url = format!("http://{addr}");
    }

    // Telemetry client
    let client = HttpTelemetryClient::new(&config.api).context("failed to build HTTP client")?;
    tracing::info!(base_url = %client.base_url(), "polling readings service");

    // Poller
    let selection = Selection::new(config.initial_room()?, today());
    let mut handle = RoomTelemetryPoller::mount(client, poller_config, selection);
    let view = tokio::spawn(view::render(handle.history(), handle.status()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            signal = &mut shutdown => {
                signal.context("failed to listen for shutdown signal")?;
                break;
            }
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => commands::apply(&mut handle, &line).await,
                Ok(None) => stdin_open = false,
                Err(err) => {
                    tracing::warn!(%err, "stdin unreadable, commands disabled");
                    stdin_open = false;
                }
            },
        }
    }
    tracing::info!("shutting down");

    handle.unmount().await;
    view.await.context("view task failed")?;

    Ok(())
}
