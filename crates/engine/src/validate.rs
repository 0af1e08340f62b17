//! Validation of submitted expenses.
//!
//! A submission passes through three checks in a fixed order; the first
//! failing check determines the reported error. Validation runs once, at
//! insertion, and is never re-checked on read.

use crate::{Category, EngineError, Expense, expense::ExpenseDraft};

/// Check a submission and turn it into a storable record.
///
/// Order of checks:
/// 1. all three fields present, string fields non-empty;
/// 2. category belongs to the fixed set;
/// 3. amount strictly positive.
pub fn validate(draft: ExpenseDraft) -> Result<Expense, EngineError> {
    let (Some(category), Some(amount), Some(date)) = (draft.category, draft.amount, draft.date)
    else {
        return Err(EngineError::MissingFields);
    };

    if category.is_empty() || date.is_empty() {
        return Err(EngineError::MissingFields);
    }

    let category = Category::parse(&category).ok_or(EngineError::InvalidCategory)?;

    // NaN and infinities fail this comparison too.
    if !(amount > 0.0) || !amount.is_finite() {
        return Err(EngineError::InvalidAmount);
    }

    Ok(Expense::new(category, amount, date))
}
