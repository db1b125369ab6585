use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Exported product categories.
///
/// Declaration order is the natural order used by grouped aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    OliveOil,
    Dates,
    Citrus,
    Tomato,
    Almonds,
    Harissa,
}

impl Product {
    pub const ALL: [Self; 6] = [
        Self::OliveOil,
        Self::Dates,
        Self::Citrus,
        Self::Tomato,
        Self::Almonds,
        Self::Harissa,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OliveOil => "olive-oil",
            Self::Dates => "dates",
            Self::Citrus => "citrus",
            Self::Tomato => "tomato",
            Self::Almonds => "almonds",
            Self::Harissa => "harissa",
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Product {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "olive-oil" | "olive_oil" => Ok(Self::OliveOil),
            "dates" => Ok(Self::Dates),
            "citrus" => Ok(Self::Citrus),
            "tomato" => Ok(Self::Tomato),
            "almonds" => Ok(Self::Almonds),
            "harissa" => Ok(Self::Harissa),
            other => Err(ValidationError::InvalidProduct {
                value: other.to_owned(),
            }),
        }
    }
}
