use crate::api::get_api;
use crate::config::Config;
use crate::env::EnvSource;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod env;
mod middleware;
mod shutdown;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = get_api(EnvSource::process());

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}
