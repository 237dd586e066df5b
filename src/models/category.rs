use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Invalid product category: {0}")]
    InvalidCategory(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shutters,
    Blinds,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category_str = match self {
            Category::Shutters => "shutters",
            Category::Blinds => "blinds",
        };
        write!(f, "{category_str}")
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shutters" => Ok(Category::Shutters),
            "blinds" => Ok(Category::Blinds),
            other => Err(CategoryError::InvalidCategory(other.to_string())),
        }
    }
}
