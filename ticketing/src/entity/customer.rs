//! `SeaORM` Entity, @generated manually

use std::fmt;

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, QueryOrder};
use serde::{Deserialize, Serialize};

use super::lookup::icontains;
use crate::validation::{
    limit_len, require_email, require_storable_date, require_text, ValidationError, MAX_NAME_LEN,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub first_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub is_active: bool,
    pub date_joined: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The first name when one is set, otherwise the email address.
    pub fn full_name(&self) -> &str {
        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            &self.email
        } else {
            first_name
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

// Lazy lookups. Customer listings always come back newest first.
impl Entity {
    fn newest_first() -> Select<Entity> {
        Entity::find().order_by_desc(Column::Id)
    }

    pub fn username_contains(fragment: &str) -> Select<Entity> {
        Self::newest_first().filter(icontains(Column::Username, fragment))
    }

    pub fn active() -> Select<Entity> {
        Self::newest_first().filter(Column::IsActive.eq(true))
    }

    pub fn registered_after(instant: DateTimeUtc) -> Select<Entity> {
        Self::newest_first().filter(Column::DateJoined.gt(instant))
    }

    pub fn with_email(email: &str) -> Select<Entity> {
        Self::newest_first().filter(Column::Email.eq(email))
    }
}

/// Input for registering a customer. `date_joined` defaults to the insert time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewCustomer {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub date_joined: Option<DateTimeUtc>,
}

impl NewCustomer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("username", &self.username)?;
        limit_len("first_name", &self.first_name, MAX_NAME_LEN)?;
        if let Some(joined) = &self.date_joined {
            require_storable_date("date_joined", joined)?;
        }
        require_email(&self.email)
    }
}

impl From<NewCustomer> for ActiveModel {
    fn from(new: NewCustomer) -> Self {
        ActiveModel {
            username: ActiveValue::Set(new.username),
            first_name: ActiveValue::Set(new.first_name),
            email: ActiveValue::Set(new.email),
            is_active: ActiveValue::Set(new.is_active),
            date_joined: ActiveValue::Set(new.date_joined.unwrap_or_else(Utc::now)),
            ..Default::default()
        }
    }
}
