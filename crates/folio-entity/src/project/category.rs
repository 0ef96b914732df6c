//! Project category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two partitions of the works gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// UI/UX design work.
    Uiux,
    /// Frontend development work.
    Frontend,
}

impl Category {
    /// Every category, in gallery order.
    pub const ALL: [Category; 2] = [Category::Uiux, Category::Frontend];

    /// Return the category as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uiux => "uiux",
            Self::Frontend => "frontend",
        }
    }

    /// Human-readable heading for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Uiux => "UI/UX Design",
            Self::Frontend => "Frontend Development",
        }
    }

    /// The accent colour the gallery themes this category with.
    pub fn accent(&self) -> &'static str {
        match self {
            Self::Uiux => "orange",
            Self::Frontend => "cyan",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = folio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uiux" => Ok(Self::Uiux),
            "frontend" => Ok(Self::Frontend),
            _ => Err(folio_core::AppError::validation(format!(
                "Invalid category: '{s}'. Expected one of: uiux, frontend"
            ))),
        }
    }
}
