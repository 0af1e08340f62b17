//! Read-path filtering of stored expenses.

use crate::{Category, Expense, expense::parse_date};

/// Optional narrowing criteria for listing expenses.
///
/// The date range only applies when both bounds are present; a one-sided
/// range is treated as no date filter at all. The range is inclusive and
/// compared by parsed calendar date, so records whose stored date does not
/// parse never match a date filter.
#[derive(Clone, Debug, Default)]
pub struct ExpenseFilter {
    pub category: Option<Category>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ExpenseFilter {
    /// Keep the expenses matching every active criterion, preserving order.
    pub fn apply(&self, expenses: Vec<Expense>) -> Vec<Expense> {
        expenses
            .into_iter()
            .filter(|expense| self.matches(expense))
            .collect()
    }

    fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.category
            && expense.category != category
        {
            return false;
        }

        if let (Some(start), Some(end)) = (self.start_date.as_deref(), self.end_date.as_deref()) {
            let (Some(start), Some(end), Some(date)) =
                (parse_date(start), parse_date(end), expense.parsed_date())
            else {
                // An unparseable bound or record date excludes the record,
                // it does not disable the filter.
                return false;
            };
            return start <= date && date <= end;
        }

        true
    }
}
