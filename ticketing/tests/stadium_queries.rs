//! Integration tests for the stadium lookups

mod common;

use chrono::{Duration, Utc};
use common::{create_event, create_stadium, ids, setup};
use sea_orm::ActiveValue;
use sea_orm::prelude::*;
use ticketing::entity::event;
use ticketing::entity::stadium::NewStadium;
use ticketing::ValidationError;

#[tokio::test]
async fn test_stadium_by_name() {
    let store = setup().await;
    let dinamo = create_stadium(&store, "Dinamo Arena", "2 Tsereteli Ave, Tbilisi", 54_549).await;
    create_stadium(&store, "Mikheil Meskhi Stadium", "Tbilisi", 27_223).await;

    let found = store.stadiums.stadium_by_name("Dinamo Arena").await.unwrap();
    assert_eq!(found, Some(dinamo));

    // exact match only
    assert_eq!(store.stadiums.stadium_by_name("dinamo arena").await.unwrap(), None);
    assert_eq!(store.stadiums.stadium_by_name("Dinamo").await.unwrap(), None);
}

#[tokio::test]
async fn test_capacity_greater_than_is_strict() {
    let store = setup().await;
    let mut created = Vec::new();
    for (name, capacity) in [("Empty Lot", 0), ("Small", 100), ("Just Over", 101), ("Big", 30_000)] {
        created.push(create_stadium(&store, name, "Kutaisi", capacity).await);
    }

    for threshold in [-1, 0, 100, 101, 50_000] {
        let found = store
            .stadiums
            .stadiums_with_capacity_greater_than(threshold)
            .await
            .unwrap();
        let expected: Vec<i32> = created
            .iter()
            .filter(|s| s.capacity > threshold)
            .map(|s| s.id)
            .collect();
        assert_eq!(ids(&found, |s| s.id), expected, "threshold {threshold}");
    }
}

#[tokio::test]
async fn test_stadiums_in_city_matches_address_substring() {
    let store = setup().await;
    let dinamo = create_stadium(&store, "Dinamo Arena", "2 Tsereteli Ave, Tbilisi", 54_549).await;
    let meskhi = create_stadium(&store, "Mikheil Meskhi Stadium", "TBILISI, Vake", 27_223).await;
    create_stadium(&store, "Adjarabet Arena", "Batumi", 20_000).await;

    let found = store.stadiums.stadiums_in_city("tbilisi").await.unwrap();
    assert_eq!(ids(&found, |s| s.id), vec![dinamo.id, meskhi.id]);

    assert!(store.stadiums.stadiums_in_city("Rustavi").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_stadiums_with_events_lists_each_host_once() {
    let store = setup().await;
    let busy = create_stadium(&store, "Busy", "Tbilisi", 1_000).await;
    let quiet = create_stadium(&store, "Quiet", "Batumi", 500).await;
    create_stadium(&store, "Unused", "Poti", 200).await;

    let now = Utc::now();
    create_event(&store, "Opening", now + Duration::days(1), busy.id).await;
    create_event(&store, "Closing", now + Duration::days(2), busy.id).await;

    // a host whose only event is cancelled still counts
    let cancelled = event::ActiveModel {
        name: ActiveValue::Set("Cancelled".to_string()),
        date: ActiveValue::Set(now - Duration::days(30)),
        stadium_id: ActiveValue::Set(quiet.id),
        is_active: ActiveValue::Set(false),
        ..Default::default()
    };
    event::Entity::insert(cancelled).exec(store.db.as_ref()).await.unwrap();

    let hosts = store.stadiums.stadiums_with_events().await.unwrap();
    assert_eq!(ids(&hosts, |s| s.id), vec![busy.id, quiet.id]);
}

#[tokio::test]
async fn test_stadiums_with_events_is_empty_without_events() {
    let store = setup().await;
    create_stadium(&store, "Unused", "Poti", 200).await;

    assert!(store.stadiums.stadiums_with_events().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_negative_capacity_is_rejected() {
    let store = setup().await;

    let err = store
        .stadiums
        .create(NewStadium {
            name: "Impossible".to_string(),
            address: "Nowhere".to_string(),
            capacity: -1,
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::NegativeCapacity(-1))
    );
}
