//! Transaction categories
//!
//! Manual entry picks from a fixed set of categories. Imported files may carry
//! any label; those are kept verbatim as [`Category::Unlisted`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Food,
    Transport,
    Rent,
    Utilities,
    Entertainment,
    /// The only inflow category
    Income,
    Other,
    /// A label from an imported file outside the fixed set
    Unlisted(String),
}

impl Category {
    /// The fixed set offered by the entry form, in selector order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Rent,
        Category::Utilities,
        Category::Entertainment,
        Category::Income,
        Category::Other,
    ];

    /// Resolve a label, case-sensitively
    pub fn parse(label: &str) -> Self {
        match label {
            "Food" => Self::Food,
            "Transport" => Self::Transport,
            "Rent" => Self::Rent,
            "Utilities" => Self::Utilities,
            "Entertainment" => Self::Entertainment,
            "Income" => Self::Income,
            "Other" => Self::Other,
            other => Self::Unlisted(other.to_string()),
        }
    }

    /// Display name, identical to the CSV label
    pub fn name(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Income => "Income",
            Self::Other => "Other",
            Self::Unlisted(label) => label,
        }
    }

    /// Check if this is the inflow category
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// Check if this category belongs to the fixed set
    pub fn is_listed(&self) -> bool {
        !matches!(self, Self::Unlisted(_))
    }

    /// Next category in selector order (wraps; unlisted labels jump to the start)
    pub fn next(&self) -> Self {
        let idx = self.selector_index().map_or(0, |i| (i + 1) % Self::ALL.len());
        Self::ALL[idx].clone()
    }

    /// Previous category in selector order (wraps)
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        let idx = self.selector_index().map_or(len - 1, |i| (i + len - 1) % len);
        Self::ALL[idx].clone()
    }

    fn selector_index(&self) -> Option<usize> {
        Self::ALL.iter().position(|c| c == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unlisted(label) => label,
            listed => listed.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_set() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.name()), category);
            assert!(category.is_listed());
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let category = Category::parse("food");
        assert_eq!(category, Category::Unlisted("food".into()));
        assert!(!category.is_listed());
        assert_eq!(category.to_string(), "food");
    }

    #[test]
    fn test_only_income_is_inflow() {
        assert!(Category::Income.is_income());
        assert!(!Category::Other.is_income());
        assert!(!Category::Unlisted("Salary".into()).is_income());
    }

    #[test]
    fn test_selector_cycles() {
        assert_eq!(Category::Food.next(), Category::Transport);
        assert_eq!(Category::Other.next(), Category::Food);
        assert_eq!(Category::Food.prev(), Category::Other);
        assert_eq!(Category::Unlisted("Pets".into()).next(), Category::Food);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::Utilities).unwrap();
        assert_eq!(json, "\"Utilities\"");

        let back: Category = serde_json::from_str("\"Gifts\"").unwrap();
        assert_eq!(back, Category::Unlisted("Gifts".into()));
    }
}
