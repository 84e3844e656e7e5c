//! Shared fixtures for the integration tests: a fresh in-memory database per
//! test, with the schema installed through the real migrator.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use ticketing::entity::customer::{self, NewCustomer};
use ticketing::entity::event::{self, NewEvent};
use ticketing::entity::stadium::{self, NewStadium};
use ticketing::entity::ticket::{self, NewTicket};
use ticketing::{Config, TicketingStore};
use tracing_subscriber::EnvFilter;

pub async fn setup() -> TicketingStore {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    // every pooled connection to sqlite::memory: is its own database
    let mut config = Config::new("sqlite::memory:");
    config.max_connections = 1;
    TicketingStore::connect(&config)
        .await
        .expect("in-memory store should start")
}

pub async fn create_customer(store: &TicketingStore, username: &str, email: &str, is_active: bool) -> customer::Model {
    store
        .customers
        .create(NewCustomer {
            username: username.to_string(),
            email: email.to_string(),
            is_active,
            ..Default::default()
        })
        .await
        .expect("customer should be created")
}

pub async fn create_stadium(store: &TicketingStore, name: &str, address: &str, capacity: i32) -> stadium::Model {
    store
        .stadiums
        .create(NewStadium {
            name: name.to_string(),
            address: address.to_string(),
            capacity,
        })
        .await
        .expect("stadium should be created")
}

pub async fn create_event(store: &TicketingStore, name: &str, date: DateTime<Utc>, stadium_id: i32) -> event::Model {
    store
        .events
        .create(NewEvent::new(name, date, stadium_id))
        .await
        .expect("event should be created")
}

pub async fn create_ticket(
    store: &TicketingStore,
    customer_id: i32,
    event_id: i32,
    bought_at: DateTime<Utc>,
) -> ticket::Model {
    store
        .tickets
        .create(NewTicket {
            customer_id,
            event_id,
            bought_at,
        })
        .await
        .expect("ticket should be created")
}

/// Sorted ids, for comparing result sets whose order is unspecified.
pub fn ids<T, F>(records: &[T], id: F) -> Vec<i32>
where
    F: Fn(&T) -> i32,
{
    let mut ids: Vec<i32> = records.iter().map(id).collect();
    ids.sort_unstable();
    ids
}
