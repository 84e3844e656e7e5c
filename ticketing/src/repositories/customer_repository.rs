use anyhow::Result;
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::entity::customer::{self, NewCustomer};

#[derive(Clone)]
pub struct CustomerRepository {
    db: Arc<DatabaseConnection>,
}

impl CustomerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<customer::Model>> {
        let customer = customer::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(customer)
    }

    pub async fn username_contains_string(&self, fragment: &str) -> Result<Vec<customer::Model>> {
        debug!(fragment, "Looking up customers by username fragment");
        let customers = customer::Entity::username_contains(fragment)
            .all(self.db.as_ref())
            .await?;
        Ok(customers)
    }

    pub async fn active_customers(&self) -> Result<Vec<customer::Model>> {
        let customers = customer::Entity::active()
            .all(self.db.as_ref())
            .await?;
        Ok(customers)
    }

    pub async fn customers_registered_after(&self, date: DateTimeUtc) -> Result<Vec<customer::Model>> {
        debug!(%date, "Looking up customers registered after");
        let customers = customer::Entity::registered_after(date)
            .all(self.db.as_ref())
            .await?;
        Ok(customers)
    }

    pub async fn customer_with_email(&self, email: &str) -> Result<Option<customer::Model>> {
        debug!(email, "Looking up customer by email");
        let customer = customer::Entity::with_email(email)
            .one(self.db.as_ref())
            .await?;
        Ok(customer)
    }

    pub async fn list_all(&self) -> Result<Vec<customer::Model>> {
        let customers = customer::Entity::find()
            .order_by_desc(customer::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(customers)
    }

    pub async fn count(&self) -> Result<u64> {
        let count = customer::Entity::find()
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    pub async fn create(&self, new_customer: NewCustomer) -> Result<customer::Model> {
        if let Err(e) = new_customer.validate() {
            warn!(email = %new_customer.email, error = %e, "Rejected new customer");
            return Err(e.into());
        }
        let customer = customer::ActiveModel::from(new_customer)
            .insert(self.db.as_ref())
            .await?;
        debug!(id = customer.id, "Created customer");
        Ok(customer)
    }

    /// Fails while the customer still holds tickets; tickets are never removed with their owner.
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let result = customer::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        debug!(id, rows = result.rows_affected, "Deleted customer");
        Ok(result.rows_affected)
    }
}
