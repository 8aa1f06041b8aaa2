//! Service entry-point: wires configuration, the database context, and the
//! HTTP application.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cretaceous_api::inbound::http::health::HealthState;
use cretaceous_api::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use cretaceous_api::server::{AppSettings, ServerConfig, create_server};

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

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let environment = settings.environment();
    let database_url = settings
        .database_url()
        .map_err(std::io::Error::other)?
        .to_owned();
    let allowed_origin = settings
        .allowed_origin()
        .map_err(std::io::Error::other)?
        .to_owned();
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    // Schema first: a half-migrated database must not serve traffic.
    let migrations_url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migrations_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;
    info!(applied, "schema migrations applied");

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(std::io::Error::other)?;
    let server_version = pool
        .server_version()
        .await
        .map_err(std::io::Error::other)?;
    info!(
        environment = %environment,
        server_version = %server_version,
        "database context ready"
    );

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, environment, allowed_origin).with_db_pool(pool);
    let server = create_server(health_state, config)?;
    info!(%bind_addr, %environment, "listening");
    server.await
}
