//! Native exchange value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The exchange a symbol natively trades on.
///
/// Indian exchanges quote in the settlement currency; US exchanges quote in
/// USD and go through the currency converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// National Stock Exchange of India (INR).
    Nse,
    /// Bombay Stock Exchange (INR).
    Bse,
    /// NASDAQ (USD).
    Nasdaq,
    /// New York Stock Exchange (USD).
    Nyse,
}

impl Exchange {
    /// Whether quotes from this exchange are already in the settlement
    /// currency and need no conversion.
    #[must_use]
    pub const fn settles_natively(&self) -> bool {
        matches!(self, Self::Nse | Self::Bse)
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nse => "NSE",
            Self::Bse => "BSE",
            Self::Nasdaq => "NASDAQ",
            Self::Nyse => "NYSE",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Exchange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NSE" => Ok(Self::Nse),
            "BSE" => Ok(Self::Bse),
            "NASDAQ" => Ok(Self::Nasdaq),
            "NYSE" => Ok(Self::Nyse),
            other => Err(format!("Unknown exchange: {other}")),
        }
    }
}
