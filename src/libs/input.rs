//! Parsing of the answers a user types into the menu.
//!
//! Every answer is parsed before any storage call is made, so a bad answer
//! costs nothing but a guidance message.

use super::task::{Keyword, Priority, SortField, Status};
use thiserror::Error;

/// Problems with what the user typed. None of these ever reach the database.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid menu choice: {0:?}")]
    InvalidChoice(String),

    #[error("invalid task number: {0:?}")]
    InvalidIndex(String),

    #[error("no keyword provided")]
    EmptyKeyword,

    #[error("task description is empty")]
    EmptyDescription,

    #[error("invalid priority choice: {0:?}")]
    InvalidPriority(String),

    #[error("invalid status choice: {0:?}")]
    InvalidStatus(String),

    #[error("invalid sort choice: {0:?}")]
    InvalidSort(String),

    #[error("the task list changed since it was displayed")]
    StaleSelection,
}

/// `1` selects to-do tasks, `2` completed ones.
pub fn parse_status_choice(input: &str) -> Result<Status, InputError> {
    match input.trim() {
        "1" => Ok(Status::Todo),
        "2" => Ok(Status::Done),
        other => Err(InputError::InvalidStatus(other.to_string())),
    }
}

/// `1` sorts by last update, `2` by status.
pub fn parse_sort_choice(input: &str) -> Result<SortField, InputError> {
    match input.trim() {
        "1" => Ok(SortField::UpdatedAt),
        "2" => Ok(SortField::Status),
        other => Err(InputError::InvalidSort(other.to_string())),
    }
}

pub fn parse_priority_choice(input: &str) -> Result<Priority, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(|level| Priority::try_from(level).ok())
        .ok_or_else(|| InputError::InvalidPriority(trimmed.to_string()))
}

pub fn parse_keyword(input: &str) -> Result<Keyword, InputError> {
    Keyword::parse(input).ok_or(InputError::EmptyKeyword)
}

pub fn parse_description(input: &str) -> Result<String, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::EmptyDescription);
    }
    Ok(input.to_string())
}

/// Parses a 1-based position into a 0-based one, bounded by `len`.
pub fn parse_index(input: &str, len: usize) -> Result<usize, InputError> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(position) if position >= 1 && position <= len => Ok(position - 1),
        _ => Err(InputError::InvalidIndex(trimmed.to_string())),
    }
}
