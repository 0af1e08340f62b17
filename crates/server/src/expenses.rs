//! Expenses API endpoints

use api_types::{
    ApiSuccess,
    expense::{ExpenseNew, ExpenseQuery, ExpenseView, SummaryView},
};
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{ServerError, server::ServerState};
use engine::{Category, EngineError, ExpenseDraft, ExpenseFilter};

fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        category: expense.category.as_str().to_string(),
        amount: expense.amount,
        date: expense.date,
    }
}

fn map_summary(summary: engine::Summary) -> SummaryView {
    SummaryView {
        total_amount: summary.total_amount,
        by_category: summary
            .by_category
            .into_iter()
            .map(|(category, amount)| (category.as_str().to_string(), amount))
            .collect(),
    }
}

/// Handle submissions of new expenses.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<Json<ApiSuccess<ExpenseView>>, ServerError> {
    let draft = ExpenseDraft {
        category: payload.category,
        amount: payload.amount,
        date: payload.date,
    };
    let expense = state.engine.add_expense(draft).await?;

    Ok(Json(ApiSuccess::new(map_expense(expense))))
}

/// Handle list requests with optional category and date-range filters.
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ExpenseQuery>,
) -> Result<Json<ApiSuccess<Vec<ExpenseView>>>, ServerError> {
    // An empty parameter counts as absent.
    let category = match params.category.filter(|name| !name.is_empty()) {
        Some(name) => Some(Category::parse(&name).ok_or(EngineError::InvalidCategory)?),
        None => None,
    };

    let filter = ExpenseFilter {
        category,
        start_date: params.start_date.filter(|date| !date.is_empty()),
        end_date: params.end_date.filter(|date| !date.is_empty()),
    };

    let expenses = state
        .engine
        .expenses(&filter)
        .await
        .into_iter()
        .map(map_expense)
        .collect();

    Ok(Json(ApiSuccess::new(expenses)))
}

/// Handle requests for the aggregate spending summary.
pub async fn analysis(State(state): State<ServerState>) -> Json<ApiSuccess<SummaryView>> {
    let summary = state.engine.summary().await;

    Json(ApiSuccess::new(map_summary(summary)))
}
