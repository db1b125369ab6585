use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Market and macro indicators that can be attached to an export record.
///
/// The indicator map on a record may be partial; absence of an indicator is
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketIndicator {
    UsdTnd,
    EurTnd,
    BrentOil,
    InflationRate,
    ShippingIndex,
    RainfallIndex,
}

impl MarketIndicator {
    pub const ALL: [Self; 6] = [
        Self::UsdTnd,
        Self::EurTnd,
        Self::BrentOil,
        Self::InflationRate,
        Self::ShippingIndex,
        Self::RainfallIndex,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UsdTnd => "usd-tnd",
            Self::EurTnd => "eur-tnd",
            Self::BrentOil => "brent-oil",
            Self::InflationRate => "inflation-rate",
            Self::ShippingIndex => "shipping-index",
            Self::RainfallIndex => "rainfall-index",
        }
    }
}

impl Display for MarketIndicator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketIndicator {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "usd-tnd" | "usd_tnd" => Ok(Self::UsdTnd),
            "eur-tnd" | "eur_tnd" => Ok(Self::EurTnd),
            "brent-oil" | "brent_oil" => Ok(Self::BrentOil),
            "inflation-rate" | "inflation_rate" => Ok(Self::InflationRate),
            "shipping-index" | "shipping_index" => Ok(Self::ShippingIndex),
            "rainfall-index" | "rainfall_index" => Ok(Self::RainfallIndex),
            other => Err(ValidationError::InvalidIndicator {
                value: other.to_owned(),
            }),
        }
    }
}
