//! `SeaORM` Entity, @generated manually

use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Query;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use super::lookup::icontains;
use crate::validation::{require_capacity, require_text, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stadium")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Entity {
    pub fn with_name(name: &str) -> Select<Entity> {
        Entity::find().filter(Column::Name.eq(name))
    }

    pub fn capacity_greater_than(capacity: i32) -> Select<Entity> {
        Entity::find().filter(Column::Capacity.gt(capacity))
    }

    /// Addresses are free text, so a city is matched as a case-insensitive substring.
    pub fn address_contains(city: &str) -> Select<Entity> {
        Entity::find().filter(icontains(Column::Address, city))
    }

    /// Stadiums hosting at least one event, whatever the event's status.
    pub fn with_events() -> Select<Entity> {
        Entity::find().filter(
            Column::Id.in_subquery(
                Query::select()
                    .column(super::event::Column::StadiumId)
                    .from(super::event::Entity)
                    .to_owned(),
            ),
        )
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewStadium {
    pub name: String,
    pub address: String,
    pub capacity: i32,
}

impl NewStadium {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("address", &self.address)?;
        require_capacity(self.capacity)
    }
}

impl From<NewStadium> for ActiveModel {
    fn from(new: NewStadium) -> Self {
        ActiveModel {
            name: ActiveValue::Set(new.name),
            address: ActiveValue::Set(new.address),
            capacity: ActiveValue::Set(new.capacity),
            ..Default::default()
        }
    }
}
