//! Aggregate spending figures over a set of expenses.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Category, Expense};

/// Total spend plus per-category subtotals.
///
/// `by_category` holds only categories that appear in the input; absent
/// categories get no zero entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_amount: f64,
    pub by_category: BTreeMap<Category, f64>,
}

/// Single pass over the input, deterministic for a given record sequence.
pub fn summarize(expenses: &[Expense]) -> Summary {
    let mut summary = Summary::default();

    for expense in expenses {
        summary.total_amount += expense.amount;
        *summary.by_category.entry(expense.category).or_insert(0.0) += expense.amount;
    }

    summary
}
