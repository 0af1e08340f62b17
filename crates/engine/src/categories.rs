//! The fixed set of expense categories.
//!
//! The set is closed: it is established at compile time and never grows at
//! runtime. Submitted category names are checked for membership with
//! [`Category::parse`] instead of ad hoc string comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five permitted classification labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Utilities,
    Entertainment,
    Health,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Utilities,
        Category::Entertainment,
        Category::Health,
    ];

    /// Canonical name, as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
        }
    }

    /// Membership check for a submitted category name. Exact, case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
