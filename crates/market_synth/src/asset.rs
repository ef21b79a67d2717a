//! Simulated underlyings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SynthError;

/// Broad class of a simulated underlying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Equity index level
    EquityIndex,
    /// FX rate (units of quote currency per unit of base)
    FxPair,
}

/// Underlying simulated by the path simulator.
///
/// The FX pair is quoted as ZAR per 1 JPY and labelled `"JPYZAR"`.
/// `"ZARJPY"` is accepted as an alias for the same instrument when parsing.
/// Deserialization goes through [`FromStr`], so configuration files accept
/// the same case-insensitive names as `str::parse`.
///
/// # Examples
///
/// ```
/// use market_synth::asset::{Asset, AssetKind};
///
/// assert_eq!(Asset::Nikkei225.label(), "Nikkei");
/// assert_eq!("ZARJPY".parse::<Asset>().unwrap(), Asset::JpyZar);
/// assert_eq!(Asset::JpyZar.kind(), AssetKind::FxPair);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Asset {
    /// Nikkei 225 equity index
    #[serde(rename = "Nikkei")]
    Nikkei225,
    /// JPY/ZAR exchange rate
    #[serde(rename = "JPYZAR")]
    JpyZar,
}

impl Asset {
    /// Output label used in the `Asset` column.
    pub fn label(&self) -> &'static str {
        match self {
            Asset::Nikkei225 => "Nikkei",
            Asset::JpyZar => "JPYZAR",
        }
    }

    /// Asset class.
    pub fn kind(&self) -> AssetKind {
        match self {
            Asset::Nikkei225 => AssetKind::EquityIndex,
            Asset::JpyZar => AssetKind::FxPair,
        }
    }
}

impl FromStr for Asset {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NIKKEI" | "NIKKEI225" | "NKY" => Ok(Asset::Nikkei225),
            "JPYZAR" | "ZARJPY" => Ok(Asset::JpyZar),
            _ => Err(SynthError::invalid_argument(format!("unknown asset '{}'", s))),
        }
    }
}

impl TryFrom<String> for Asset {
    type Error = SynthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
