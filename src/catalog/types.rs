use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    /// Non-negative price in USD.
    pub price: f64,
    pub description: String,
    /// One of the category names served by the categories endpoint.
    pub category: String,
    /// Image URI.
    pub image: String,
    pub rating: Rating,
}

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0 to 5.
    pub rate: f64,
    pub count: u64,
}

impl Product {
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Ordering applied by the selection engine after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOption {
    /// Keep API order.
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [Self::Default, Self::PriceAsc, Self::PriceDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }

    /// Next mode in menu order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Default => Self::PriceAsc,
            Self::PriceAsc => Self::PriceDesc,
            Self::PriceDesc => Self::Default,
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort mode '{0}' (expected default, price-asc or price-desc)")]
pub struct ParseSortError(String);

impl FromStr for SortOption {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| ParseSortError(s.to_string()))
    }
}
