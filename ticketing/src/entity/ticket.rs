//! `SeaORM` Entity, @generated manually

use chrono::Duration;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use super::lookup::nothing;
use crate::validation::{is_storable, require_storable_date, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub event_id: i32,
    pub bought_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Event,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    pub fn by_customer(customer_id: i32) -> Select<Entity> {
        Entity::find().filter(Column::CustomerId.eq(customer_id))
    }

    pub fn for_event(event_id: i32) -> Select<Entity> {
        Entity::find().filter(Column::EventId.eq(event_id))
    }

    pub fn bought_since(instant: DateTimeUtc) -> Select<Entity> {
        Entity::find().filter(Column::BoughtAt.gte(instant))
    }

    /// Tickets bought in the `days` days up to `now`.
    ///
    /// A negative window is empty; a window reaching back before any storable
    /// date covers every ticket.
    pub fn bought_within(now: DateTimeUtc, days: i64) -> Select<Entity> {
        match window_start(now, days) {
            Window::Empty => Entity::find().filter(nothing()),
            Window::Since(start) => Entity::bought_since(start),
            Window::Everything => Entity::find(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Window {
    Empty,
    Since(DateTimeUtc),
    Everything,
}

fn window_start(now: DateTimeUtc, days: i64) -> Window {
    if days < 0 {
        return Window::Empty;
    }
    match Duration::try_days(days).and_then(|span| now.checked_sub_signed(span)) {
        Some(start) if is_storable(&start) => Window::Since(start),
        _ => Window::Everything,
    }
}

/// How a ticket reads to a person: `"<customer> -- <event>"`.
pub fn label(customer: &super::customer::Model, event: &super::event::Model) -> String {
    format!("{customer} -- {event}")
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewTicket {
    pub customer_id: i32,
    pub event_id: i32,
    pub bought_at: DateTimeUtc,
}

impl NewTicket {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_storable_date("bought_at", &self.bought_at)
    }
}

impl From<NewTicket> for ActiveModel {
    fn from(new: NewTicket) -> Self {
        ActiveModel {
            customer_id: ActiveValue::Set(new.customer_id),
            event_id: ActiveValue::Set(new.event_id),
            bought_at: ActiveValue::Set(new.bought_at),
            ..Default::default()
        }
    }
}
