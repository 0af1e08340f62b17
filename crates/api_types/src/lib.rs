//! Wire types shared between the server and its clients.
//!
//! These types carry no domain logic; the server maps them to and from
//! engine types at the handler boundary.

use serde::{Deserialize, Serialize};

/// Discriminator carried by every response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Envelope for a successful response: `{"status":"success","data":...}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub status: Status,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: Status::Success,
            data,
        }
    }
}

/// Envelope for a failed response: `{"status":"error","error":"..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub status: Status,
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: error.into(),
        }
    }
}

pub mod expense {
    use std::collections::BTreeMap;

    use super::*;

    /// Request body for `POST /expenses`.
    ///
    /// Every field is optional; presence is checked server-side so a missing
    /// key gets the documented "Missing required fields" error instead of a
    /// deserialization rejection.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub category: Option<String>,
        pub amount: Option<f64>,
        pub date: Option<String>,
    }

    /// One stored expense, as returned by create and list.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub category: String,
        pub amount: f64,
        pub date: String,
    }

    /// Query parameters for `GET /expenses`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseQuery {
        pub category: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    /// Response payload for `GET /expenses/analysis`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SummaryView {
        pub total_amount: f64,
        pub by_category: BTreeMap<String, f64>,
    }
}
