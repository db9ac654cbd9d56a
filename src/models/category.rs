//! Spending categories
//!
//! Categories are a reporting dimension only. They never take part in the
//! share or debt arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Transport,
    Water,
    Electricity,
    #[serde(rename = "Dining Out")]
    DiningOut,
    Child,
    Entertainment,
    Health,
    Home,
    Education,
    Subscription,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Groceries,
        Category::Transport,
        Category::Water,
        Category::Electricity,
        Category::DiningOut,
        Category::Child,
        Category::Entertainment,
        Category::Health,
        Category::Home,
        Category::Education,
        Category::Subscription,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::Water => "Water",
            Self::Electricity => "Electricity",
            Self::DiningOut => "Dining Out",
            Self::Child => "Child",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Home => "Home",
            Self::Education => "Education",
            Self::Subscription => "Subscription",
        }
    }

    /// Name used in the household spreadsheet
    pub const fn portuguese_label(self) -> &'static str {
        match self {
            Self::Groceries => "Mercado",
            Self::Transport => "Transporte",
            Self::Water => "Água",
            Self::Electricity => "Luz",
            Self::DiningOut => "Comida boa",
            Self::Child => "Filho",
            Self::Entertainment => "Entreterimento",
            Self::Health => "Saúde",
            Self::Home => "Casa",
            Self::Education => "Educação",
            Self::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Case-insensitive match against either label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| {
                c.label().to_lowercase() == wanted || c.portuguese_label().to_lowercase() == wanted
            })
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category '{}'", self.0)
    }
}

impl std::error::Error for CategoryParseError {}
