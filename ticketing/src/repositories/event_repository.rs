use anyhow::Result;
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::ActiveModelTrait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::entity::event::{self, NewEvent};
use crate::entity::stadium;
use crate::validation::ValidationError;

#[derive(Clone)]
pub struct EventRepository {
    db: Arc<DatabaseConnection>,
}

impl EventRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<event::Model>> {
        let event = event::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(event)
    }

    pub async fn event_after_year(&self, year: i32) -> Result<Vec<event::Model>> {
        debug!(year, "Looking up events after year");
        let events = event::Entity::after_year(year)
            .all(self.db.as_ref())
            .await?;
        Ok(events)
    }

    pub async fn events_at_stadium(&self, stadium_name: &str) -> Result<Vec<event::Model>> {
        debug!(stadium_name, "Looking up events at stadium");
        let events = event::Entity::at_stadium(stadium_name)
            .all(self.db.as_ref())
            .await?;
        Ok(events)
    }

    pub async fn upcoming_events(&self) -> Result<Vec<event::Model>> {
        let events = event::Entity::upcoming(Utc::now())
            .all(self.db.as_ref())
            .await?;
        Ok(events)
    }

    pub async fn active_events(&self) -> Result<Vec<event::Model>> {
        let events = event::Entity::active()
            .all(self.db.as_ref())
            .await?;
        Ok(events)
    }

    /// The stadium where the event takes place.
    pub async fn stadium_of(&self, event: &event::Model) -> Result<Option<stadium::Model>> {
        let stadium = event
            .find_related(stadium::Entity)
            .one(self.db.as_ref())
            .await?;
        Ok(stadium)
    }

    pub async fn create(&self, new_event: NewEvent) -> Result<event::Model> {
        if let Err(e) = new_event.validate() {
            warn!(name = %new_event.name, error = %e, "Rejected new event");
            return Err(e.into());
        }

        let stadium = stadium::Entity::find_by_id(new_event.stadium_id)
            .one(self.db.as_ref())
            .await?;
        if stadium.is_none() {
            warn!(stadium_id = new_event.stadium_id, "Rejected event for unknown stadium");
            return Err(ValidationError::MissingReference {
                entity: "stadium",
                id: new_event.stadium_id,
            }
            .into());
        }

        let event = event::ActiveModel::from(new_event)
            .insert(self.db.as_ref())
            .await?;
        debug!(id = event.id, stadium_id = event.stadium_id, "Created event");
        Ok(event)
    }

    /// Removes the event together with every ticket sold for it.
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let result = event::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        debug!(id, rows = result.rows_affected, "Deleted event");
        Ok(result.rows_affected)
    }
}
