use api_types::ApiError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod expenses;
pub mod reports;
mod server;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{ExpenseNew, ExpenseQuery, ExpenseView, SummaryView};
        pub use engine::Expense;
    }
}

/// Error returned by request handlers.
///
/// Every engine error is a malformed request, so the whole taxonomy maps to
/// `400` with the error-envelope body.
pub struct ServerError(EngineError);

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let ServerError(err) = self;
        (StatusCode::BAD_REQUEST, Json(ApiError::new(err.to_string()))).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self(value)
    }
}
