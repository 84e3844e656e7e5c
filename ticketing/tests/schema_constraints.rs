//! Referential actions and uniqueness enforced by the migrated schema

mod common;

use chrono::{Duration, Utc};
use common::{create_customer, create_event, create_stadium, create_ticket, setup};
use migration::{Migrator, MigratorTrait};
use sea_orm::prelude::*;
use sea_orm::ActiveValue;
use ticketing::entity::customer;

#[tokio::test]
async fn test_deleting_an_event_removes_its_tickets() {
    let store = setup().await;
    let stadium = create_stadium(&store, "Dinamo Arena", "Tbilisi", 54_549).await;
    let derby = create_event(&store, "Derby", Utc::now(), stadium.id).await;
    let cup = create_event(&store, "Cup", Utc::now(), stadium.id).await;
    let ana = create_customer(&store, "ana", "ana@example.ge", true).await;
    create_ticket(&store, ana.id, derby.id, Utc::now()).await;
    create_ticket(&store, ana.id, derby.id, Utc::now()).await;
    let kept = create_ticket(&store, ana.id, cup.id, Utc::now()).await;

    assert_eq!(store.events.delete(derby.id).await.unwrap(), 1);

    assert_eq!(store.tickets.ticket_count_for_event(derby.id).await.unwrap(), 0);
    assert_eq!(store.tickets.tickets_by_customer(ana.id).await.unwrap(), vec![kept]);
    assert!(store.customers.find_by_id(ana.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_deleting_a_customer_never_takes_tickets_along() {
    let store = setup().await;
    let stadium = create_stadium(&store, "Dinamo Arena", "Tbilisi", 54_549).await;
    let derby = create_event(&store, "Derby", Utc::now(), stadium.id).await;
    let holder = create_customer(&store, "holder", "holder@example.ge", true).await;
    let ticket = create_ticket(&store, holder.id, derby.id, Utc::now()).await;

    assert!(store.customers.delete(holder.id).await.is_err());
    assert_eq!(store.tickets.find_by_id(ticket.id).await.unwrap(), Some(ticket));
    assert!(store.customers.find_by_id(holder.id).await.unwrap().is_some());

    // no tickets, nothing in the way
    let browser = create_customer(&store, "browser", "browser@example.ge", false).await;
    assert_eq!(store.customers.delete(browser.id).await.unwrap(), 1);
    assert_eq!(store.customers.find_by_id(browser.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_stadium_with_events_cannot_be_deleted() {
    let store = setup().await;
    let stadium = create_stadium(&store, "Dinamo Arena", "Tbilisi", 54_549).await;
    let derby = create_event(&store, "Derby", Utc::now() + Duration::days(1), stadium.id).await;

    assert!(store.stadiums.delete(stadium.id).await.is_err());
    assert_eq!(store.events.find_by_id(derby.id).await.unwrap(), Some(derby.clone()));

    store.events.delete(derby.id).await.unwrap();
    assert_eq!(store.stadiums.delete(stadium.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_deleting_unknown_ids_affects_nothing() {
    let store = setup().await;

    assert_eq!(store.customers.delete(1).await.unwrap(), 0);
    assert_eq!(store.stadiums.delete(1).await.unwrap(), 0);
    assert_eq!(store.events.delete(1).await.unwrap(), 0);
    assert_eq!(store.tickets.delete(1).await.unwrap(), 0);
}

#[tokio::test]
async fn test_email_uniqueness_holds_below_the_repository() {
    let store = setup().await;
    create_customer(&store, "first", "taken@example.ge", true).await;

    let duplicate = customer::ActiveModel {
        username: ActiveValue::Set("second".to_string()),
        first_name: ActiveValue::Set(String::new()),
        email: ActiveValue::Set("taken@example.ge".to_string()),
        is_active: ActiveValue::Set(false),
        date_joined: ActiveValue::Set(Utc::now()),
        ..Default::default()
    };
    assert!(customer::Entity::insert(duplicate).exec(store.db.as_ref()).await.is_err());
}

#[tokio::test]
async fn test_schema_can_be_rolled_back_and_reinstalled() {
    let store = setup().await;
    create_customer(&store, "ana", "ana@example.ge", true).await;

    Migrator::down(store.db.as_ref(), None).await.unwrap();
    assert!(customer::Entity::find().all(store.db.as_ref()).await.is_err());

    Migrator::up(store.db.as_ref(), None).await.unwrap();
    assert_eq!(store.customers.count().await.unwrap(), 0);
}
