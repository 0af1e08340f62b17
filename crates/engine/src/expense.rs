//! The module contains the `Expense` type, one validated spending record.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Category;

/// Calendar-date format used for storing and comparing expense dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated expense record.
///
/// Records are immutable once stored and carry no identifier; identity is
/// their position in the store. The date keeps the submitted string form and
/// is compared by parsed calendar date where a comparison is needed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub category: Category,
    pub amount: f64,
    pub date: String,
}

impl Expense {
    pub fn new(category: Category, amount: f64, date: String) -> Self {
        Self {
            category,
            amount,
            date,
        }
    }

    /// The stored date as a calendar date, `None` when the stored string does
    /// not parse. An unparseable date never matches a date-range filter.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.amount, self.category, self.date)
    }
}

/// An unvalidated submission, fields as the client sent them.
///
/// All fields are optional so that an absent JSON key and an empty value can
/// both be reported as a missing field by the validator.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExpenseDraft {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

pub(crate) fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}
