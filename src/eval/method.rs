//! Gain variants for discounted cumulative gain.

use crate::error::{MetricsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a relevance value is turned into gain before the positional discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DcgMethod {
    /// Gain is the relevance itself: `rel / log2(i + 2)`.
    #[default]
    Standard,
    /// Exponential gain: `(2^rel - 1) / log2(i + 2)`.
    Industry,
}

impl DcgMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DcgMethod::Standard => "standard",
            DcgMethod::Industry => "industry",
        }
    }

    /// Gain of a single relevance value.
    #[inline]
    pub fn gain(&self, relevance: f64) -> f64 {
        match self {
            DcgMethod::Standard => relevance,
            DcgMethod::Industry => relevance.exp2() - 1.0,
        }
    }
}

impl FromStr for DcgMethod {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(DcgMethod::Standard),
            "industry" => Ok(DcgMethod::Industry),
            other => Err(MetricsError::InvalidMethod(other.to_string())),
        }
    }
}

impl fmt::Display for DcgMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positional discount for a 0-based rank: `log2(rank + 2)`.
#[inline]
pub(crate) fn discount(rank: usize) -> f64 {
    ((rank + 2) as f64).log2()
}
