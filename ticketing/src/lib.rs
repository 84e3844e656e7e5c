pub mod config;
pub mod database;
pub mod entity;
pub mod repositories;
pub mod store;
pub mod validation;

pub use config::Config;
pub use database::{get_db_connection, install_schema};
pub use repositories::{CustomerRepository, EventRepository, StadiumRepository, TicketRepository};
pub use store::TicketingStore;
pub use validation::ValidationError;
