use std::sync::Arc;

use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;

/// Opens the pool and brings the schema up to date. Either failure is fatal.
#[cfg(not(tarpaulin_include))]
pub async fn connect_and_migrate(config: &DatabaseConfig) -> anyhow::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(config.url());
    opt.max_connections(config.max_open_connections)
        .max_lifetime(config.max_lifetime())
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.with_context(|| {
        format!(
            "failed to connect to database {} at {}:{}",
            config.name, config.host, config.port
        )
    })?;

    info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        max_connections = config.max_open_connections,
        "Database pool ready"
    );

    Migrator::up(&conn, None)
        .await
        .context("failed to apply database migrations")?;

    info!("Database migrations applied");

    Ok(Arc::new(conn))
}
