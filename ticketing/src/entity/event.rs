//! `SeaORM` Entity, @generated manually

use std::fmt;

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use super::lookup::nothing;
use crate::validation::{is_storable, require_storable_date, require_text, ValidationError, STORABLE_YEARS};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub date: DateTimeUtc,
    pub stadium_id: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stadium::Entity",
        from = "Column::StadiumId",
        to = "super::stadium::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Stadium,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::stadium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stadium.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Entity {
    /// Events whose UTC calendar year is strictly later than `year`.
    ///
    /// Years outside [`STORABLE_YEARS`] never bind a datetime: before the range
    /// every event qualifies, after it none does.
    pub fn after_year(year: i32) -> Select<Entity> {
        if year < *STORABLE_YEARS.start() {
            return Entity::find();
        }
        match start_of_year_after(year).filter(is_storable) {
            Some(start) => Entity::find().filter(Column::Date.gte(start)),
            None => Entity::find().filter(nothing()),
        }
    }

    pub fn at_stadium(stadium_name: &str) -> Select<Entity> {
        Entity::find()
            .inner_join(super::stadium::Entity)
            .filter(super::stadium::Column::Name.eq(stadium_name))
    }

    pub fn upcoming(now: DateTimeUtc) -> Select<Entity> {
        Entity::find().filter(Column::Date.gt(now))
    }

    pub fn active() -> Select<Entity> {
        Entity::find().filter(Column::IsActive.eq(true))
    }
}

/// Midnight UTC on January 1st of `year + 1`, or `None` past the end of the calendar.
fn start_of_year_after(year: i32) -> Option<DateTimeUtc> {
    let next = year.checked_add(1)?;
    let midnight = NaiveDate::from_ymd_opt(next, 1, 1)?.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc())
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub date: DateTimeUtc,
    pub stadium_id: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewEvent {
    pub fn new(name: impl Into<String>, date: DateTimeUtc, stadium_id: i32) -> Self {
        NewEvent {
            name: name.into(),
            date,
            stadium_id,
            is_active: default_active(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_storable_date("date", &self.date)
    }
}

impl From<NewEvent> for ActiveModel {
    fn from(new: NewEvent) -> Self {
        ActiveModel {
            name: ActiveValue::Set(new.name),
            date: ActiveValue::Set(new.date),
            stadium_id: ActiveValue::Set(new.stadium_id),
            is_active: ActiveValue::Set(new.is_active),
            ..Default::default()
        }
    }
}
