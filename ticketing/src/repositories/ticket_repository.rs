use anyhow::Result;
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::ActiveModelTrait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::entity::ticket::{self, NewTicket};
use crate::entity::{customer, event};
use crate::validation::ValidationError;

/// Window used by [`TicketRepository::recent_tickets_default`].
pub const DEFAULT_RECENT_DAYS: i64 = 30;

#[derive(Clone)]
pub struct TicketRepository {
    db: Arc<DatabaseConnection>,
}

impl TicketRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ticket::Model>> {
        let ticket = ticket::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(ticket)
    }

    pub async fn tickets_by_customer(&self, customer_id: i32) -> Result<Vec<ticket::Model>> {
        debug!(customer_id, "Looking up tickets by customer");
        let tickets = ticket::Entity::by_customer(customer_id)
            .all(self.db.as_ref())
            .await?;
        Ok(tickets)
    }

    pub async fn tickets_for_event(&self, event_id: i32) -> Result<Vec<ticket::Model>> {
        debug!(event_id, "Looking up tickets for event");
        let tickets = ticket::Entity::for_event(event_id)
            .all(self.db.as_ref())
            .await?;
        Ok(tickets)
    }

    /// Tickets bought within the last `days` days, counted back from now.
    pub async fn recent_tickets(&self, days: i64) -> Result<Vec<ticket::Model>> {
        debug!(days, "Looking up recent tickets");
        let tickets = ticket::Entity::bought_within(Utc::now(), days)
            .all(self.db.as_ref())
            .await?;
        Ok(tickets)
    }

    pub async fn recent_tickets_default(&self) -> Result<Vec<ticket::Model>> {
        self.recent_tickets(DEFAULT_RECENT_DAYS).await
    }

    pub async fn ticket_count_for_event(&self, event_id: i32) -> Result<u64> {
        let count = ticket::Entity::for_event(event_id)
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    /// Renders the ticket as `"<customer> -- <event>"`, or `None` when the ticket is unknown.
    pub async fn describe(&self, id: i32) -> Result<Option<String>> {
        let Some(ticket) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let customer = ticket
            .find_related(customer::Entity)
            .one(self.db.as_ref())
            .await?;
        let event = ticket
            .find_related(event::Entity)
            .one(self.db.as_ref())
            .await?;

        Ok(match (customer, event) {
            (Some(customer), Some(event)) => Some(ticket::label(&customer, &event)),
            _ => None,
        })
    }

    pub async fn create(&self, new_ticket: NewTicket) -> Result<ticket::Model> {
        if let Err(e) = new_ticket.validate() {
            warn!(customer_id = new_ticket.customer_id, error = %e, "Rejected new ticket");
            return Err(e.into());
        }

        let customer = customer::Entity::find_by_id(new_ticket.customer_id)
            .one(self.db.as_ref())
            .await?;
        if customer.is_none() {
            warn!(customer_id = new_ticket.customer_id, "Rejected ticket for unknown customer");
            return Err(ValidationError::MissingReference {
                entity: "customer",
                id: new_ticket.customer_id,
            }
            .into());
        }

        let event = event::Entity::find_by_id(new_ticket.event_id)
            .one(self.db.as_ref())
            .await?;
        if event.is_none() {
            warn!(event_id = new_ticket.event_id, "Rejected ticket for unknown event");
            return Err(ValidationError::MissingReference {
                entity: "event",
                id: new_ticket.event_id,
            }
            .into());
        }

        let ticket = ticket::ActiveModel::from(new_ticket)
            .insert(self.db.as_ref())
            .await?;
        debug!(id = ticket.id, event_id = ticket.event_id, "Created ticket");
        Ok(ticket)
    }

    pub async fn delete(&self, id: i32) -> Result<u64> {
        let result = ticket::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        debug!(id, rows = result.rows_affected, "Deleted ticket");
        Ok(result.rows_affected)
    }
}
