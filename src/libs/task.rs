//! Task records and the value types stored alongside them.
//!
//! A [`Task`] is one row of the `tasks` table. Its [`Status`] and [`Priority`]
//! are closed enums that encode and decode themselves through rusqlite, so a
//! row holding anything outside the allowed values fails to load instead of
//! leaking an invalid state into the menu.

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub const STATUS_TODO: &str = "À faire";
pub const STATUS_DONE: &str = "Accomplie";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub priority: Priority,
}

/// Completion state of a task, persisted as its French label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Todo,
    Done,
}

/// Error returned when a stored status label is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => STATUS_TODO,
            Status::Done => STATUS_DONE,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_TODO => Ok(Status::Todo),
            STATUS_DONE => Ok(Status::Done),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Borrowed(ValueRef::Text(self.as_str().as_bytes())))
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// Task urgency, from 1 (high) to 3 (low).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    High = 1,
    Medium = 2,
    #[default]
    Low = 3,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("priority must be 1, 2 or 3, got {0}")]
pub struct InvalidPriority(pub i64);

impl Priority {
    pub fn level(&self) -> i64 {
        *self as i64
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "haute",
            Priority::Medium => "moyenne",
            Priority::Low => "basse",
        }
    }
}

impl TryFrom<i64> for Priority {
    type Error = InvalidPriority;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(InvalidPriority(other)),
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "priorité {} ({})", self.level(), self.label())
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(Value::Integer(self.level())))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let level = value.as_i64()?;
        Priority::try_from(level).map_err(|_| FromSqlError::OutOfRange(level))
    }
}

/// A search term that is guaranteed to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    /// Trims `input`, returning `None` when nothing is left to search for.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Keyword(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `text` contains the keyword, ignoring case (accented letters included).
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Columns a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    UpdatedAt,
    Status,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::UpdatedAt => "updated_at",
            SortField::Status => "status",
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ByStatus(Status),
    Search(Keyword),
    Sorted(SortField),
}
