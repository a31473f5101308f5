use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use super::migrations::Migrator;
use crate::config::DatabaseConfig;

/// Opens the Credential Store pool and applies pending migrations when enabled.
///
/// # Errors
/// Fails when the store is unreachable or a migration fails.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = open(cfg).await?;

    if cfg.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("credential store migration failed")?;
        tracing::info!("credential store schema is up to date");
    }

    Ok(db)
}

async fn open(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    #[cfg(feature = "db-sqlite")]
    if is_memory_dsn(&cfg.dsn) {
        return open_memory(&cfg.dsn).await;
    }

    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.max_connections(cfg.max_connections).sqlx_logging(false);

    Database::connect(opts)
        .await
        .context("failed to connect to credential store")
}

/// An in-memory `SQLite` database exists only as long as its connection.
#[must_use]
pub fn is_memory_dsn(dsn: &str) -> bool {
    dsn.starts_with("sqlite::memory:") || dsn.contains("mode=memory")
}

/// One connection, never reaped: the pool's idle and lifetime reapers would
/// otherwise swap it for a fresh, empty database.
#[cfg(feature = "db-sqlite")]
async fn open_memory(dsn: &str) -> anyhow::Result<DatabaseConnection> {
    use sea_orm::SqlxSqliteConnector;
    use sea_orm::sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(dsn)
        .await
        .context("failed to open in-memory credential store")?;
    tracing::debug!("credential store pinned to a single in-memory connection");

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}
