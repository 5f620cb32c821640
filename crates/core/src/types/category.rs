//! Menu categories.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a menu category.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(String);

/// Menu category for products.
///
/// The set is closed; the storefront renders one tab per category in
/// [`Category::ALL`] order. Serialized values match the remote store rows
/// (Portuguese display names, accents included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Pizzas,
    #[serde(rename = "Pastéis")]
    Pasteis,
    Combos,
    Bebidas,
    Sobremesas,
}

impl Category {
    /// All categories in storefront display order.
    pub const ALL: [Self; 5] = [
        Self::Pizzas,
        Self::Pasteis,
        Self::Combos,
        Self::Bebidas,
        Self::Sobremesas,
    ];

    /// The display (and wire) name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pizzas => "Pizzas",
            Self::Pasteis => "Pastéis",
            Self::Combos => "Combos",
            Self::Bebidas => "Bebidas",
            Self::Sobremesas => "Sobremesas",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pizzas" => Ok(Self::Pizzas),
            "Pastéis" => Ok(Self::Pasteis),
            "Combos" => Ok(Self::Combos),
            "Bebidas" => Ok(Self::Bebidas),
            "Sobremesas" => Ok(Self::Sobremesas),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_keep_accents() {
        let json = serde_json::to_string(&Category::Pasteis).expect("serialize");
        assert_eq!(json, "\"Pastéis\"");

        let back: Category = serde_json::from_str("\"Pastéis\"").expect("deserialize");
        assert_eq!(back, Category::Pasteis);
    }

    #[test]
    fn parse_round_trips_every_category() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().expect("parse");
            assert_eq!(parsed, category);
        }
        let err = "Lanches".parse::<Category>().expect_err("unknown label");
        assert_eq!(err.to_string(), "unknown category: Lanches");
    }
}
