//! Storefront server entry-point: load settings, prepare the store, serve.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use storefront::inbound::http::health::HealthState;
use storefront::outbound::persistence::PoolConfig;
use storefront::server::{ServerConfig, ServerSettings, create_server};
use storefront::startup::prepare_store;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    info!(
        database_url = settings.database_url(),
        pool_size = settings.pool_size(),
        "starting storefront"
    );

    let pool_config = PoolConfig::new(settings.database_url()).with_max_size(settings.pool_size());
    let db_pool = prepare_store(pool_config).await?;

    let config = ServerConfig::new(settings.bind_addr(), db_pool);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(storefront::server::prometheus_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
