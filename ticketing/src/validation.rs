//! Input checks applied before a record is inserted.
//!
//! The database enforces uniqueness and foreign keys; everything it cannot
//! express (blank strings, length limits, email syntax, negative capacity,
//! dates a MySQL `DATETIME` cannot hold) is rejected here with a [`ValidationError`].

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Utc};
use regex::Regex;
use thiserror::Error;

/// Longest value accepted by the short text columns (names, addresses, usernames).
pub const MAX_NAME_LEN: usize = 100;

/// Longest email address accepted, as per RFC 5321.
pub const MAX_EMAIL_LEN: usize = 254;

/// Calendar years a `DATETIME` column holds on every supported backend.
pub const STORABLE_YEARS: RangeInclusive<i32> = 1000..=9999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("{field} must be at most {max} characters, got {len}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("capacity must not be negative, got {0}")]
    NegativeCapacity(i32),

    #[error("{field} must fall within the years 1000 to 9999, got year {year}")]
    DateOutOfRange { field: &'static str, year: i32 },

    #[error("{entity} with id {id} does not exist")]
    MissingReference { entity: &'static str, id: i32 },
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    limit_len(field, value, MAX_NAME_LEN)
}

pub(crate) fn limit_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, max, len });
    }
    Ok(())
}

pub(crate) fn require_email(value: &str) -> Result<(), ValidationError> {
    limit_len("email", value, MAX_EMAIL_LEN)?;
    if !email_pattern().is_match(value) {
        return Err(ValidationError::InvalidEmail(value.to_string()));
    }
    Ok(())
}

pub(crate) fn require_capacity(capacity: i32) -> Result<(), ValidationError> {
    if capacity < 0 {
        return Err(ValidationError::NegativeCapacity(capacity));
    }
    Ok(())
}

pub(crate) fn is_storable(instant: &DateTime<Utc>) -> bool {
    STORABLE_YEARS.contains(&instant.year())
}

pub(crate) fn require_storable_date(field: &'static str, instant: &DateTime<Utc>) -> Result<(), ValidationError> {
    if !is_storable(instant) {
        return Err(ValidationError::DateOutOfRange {
            field,
            year: instant.year(),
        });
    }
    Ok(())
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // one '@', no whitespace, and a dotted domain
        Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is valid")
    })
}
