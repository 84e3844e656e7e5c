use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::Config;

pub async fn get_db_connection(config: &Config) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(config.sql_logging);

    let db = Database::connect(options)
        .await
        .context("failed to connect to the ticketing database")?;
    info!(
        backend = ?db.get_database_backend(),
        max_connections = config.max_connections,
        "Connected to database via Sea-ORM"
    );
    Ok(db)
}

/// Applies every pending migration, creating the four ticketing tables on a fresh database.
pub async fn install_schema(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .context("failed to install the ticketing schema")?;
    info!("Ticketing schema is up to date");
    Ok(())
}
