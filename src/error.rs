//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by mutations on a single [`crate::models::Record`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record already carries a birthday
    #[error("Birthday for {name} is already set")]
    DuplicateBirthday { name: String },
}

/// Errors produced while parsing or executing one interpreter command.
///
/// The `Display` form of every variant is the one-line message shown to the
/// user.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong number of arguments for the verb
    #[error("{0}")]
    Usage(&'static str),

    /// Verb not recognised
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// No contact stored under the given name
    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    /// Record mutation failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Field validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The address book could not be rendered as JSON
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
