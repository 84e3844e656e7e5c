use anyhow::Result;
use sea_orm::prelude::*;
use sea_orm::ActiveModelTrait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::entity::stadium::{self, NewStadium};

#[derive(Clone)]
pub struct StadiumRepository {
    db: Arc<DatabaseConnection>,
}

impl StadiumRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<stadium::Model>> {
        let stadium = stadium::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(stadium)
    }

    /// Names are not unique; the first stadium stored under `name` wins.
    pub async fn stadium_by_name(&self, name: &str) -> Result<Option<stadium::Model>> {
        debug!(name, "Looking up stadium by name");
        let stadium = stadium::Entity::with_name(name)
            .one(self.db.as_ref())
            .await?;
        Ok(stadium)
    }

    pub async fn stadiums_with_capacity_greater_than(&self, capacity: i32) -> Result<Vec<stadium::Model>> {
        let stadiums = stadium::Entity::capacity_greater_than(capacity)
            .all(self.db.as_ref())
            .await?;
        Ok(stadiums)
    }

    pub async fn stadiums_in_city(&self, city: &str) -> Result<Vec<stadium::Model>> {
        debug!(city, "Looking up stadiums by city");
        let stadiums = stadium::Entity::address_contains(city)
            .all(self.db.as_ref())
            .await?;
        Ok(stadiums)
    }

    pub async fn stadiums_with_events(&self) -> Result<Vec<stadium::Model>> {
        let stadiums = stadium::Entity::with_events()
            .all(self.db.as_ref())
            .await?;
        Ok(stadiums)
    }

    pub async fn create(&self, new_stadium: NewStadium) -> Result<stadium::Model> {
        if let Err(e) = new_stadium.validate() {
            warn!(name = %new_stadium.name, error = %e, "Rejected new stadium");
            return Err(e.into());
        }
        let stadium = stadium::ActiveModel::from(new_stadium)
            .insert(self.db.as_ref())
            .await?;
        debug!(id = stadium.id, "Created stadium");
        Ok(stadium)
    }

    /// Fails while any event is still scheduled at the stadium.
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let result = stadium::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        debug!(id, rows = result.rows_affected, "Deleted stadium");
        Ok(result.rows_affected)
    }
}
