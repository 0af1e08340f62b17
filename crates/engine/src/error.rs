//! The module contains the errors the engine can throw.
//!
//! Every variant is a validation failure on a submitted expense or query;
//! the engine has no fatal errors. The display strings are the exact
//! messages surfaced to API clients.

use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid category")]
    InvalidCategory,
    #[error("Amount must be a positive number")]
    InvalidAmount,
}
