use anyhow::Result;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::database::{get_db_connection, install_schema};
use crate::repositories::{CustomerRepository, EventRepository, StadiumRepository, TicketRepository};

/// One repository per entity, all sharing a single connection pool.
#[derive(Clone)]
pub struct TicketingStore {
    pub db: Arc<DatabaseConnection>,
    pub customers: CustomerRepository,
    pub stadiums: StadiumRepository,
    pub events: EventRepository,
    pub tickets: TicketRepository,
}

impl TicketingStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        TicketingStore {
            customers: CustomerRepository::new(db.clone()),
            stadiums: StadiumRepository::new(db.clone()),
            events: EventRepository::new(db.clone()),
            tickets: TicketRepository::new(db.clone()),
            db,
        }
    }

    /// Connects using `config` and brings the schema up to date before handing out repositories.
    pub async fn connect(config: &Config) -> Result<Self> {
        let db = get_db_connection(config).await?;
        install_schema(&db).await?;
        tracing::info!("Ticketing store ready");
        Ok(Self::new(Arc::new(db)))
    }
}
