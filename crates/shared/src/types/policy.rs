//! Policies applied to computed document totals.
//!
//! Totals are always computed at full precision. These policies decide
//! what happens when a summary leaves the computation: whether negative
//! totals survive and how the snapshot sent to the backend is rounded.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounding applied to a summary snapshot before it is saved or printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadRounding {
    /// Send values exactly as computed.
    FullPrecision,
    /// Round to satang (2 places), half away from zero.
    #[default]
    TwoDecimals,
}

impl PayloadRounding {
    /// Applies the rounding policy to a single value.
    #[must_use]
    pub fn apply(self, value: Decimal) -> Decimal {
        match self {
            Self::FullPrecision => value,
            Self::TwoDecimals => {
                value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            }
        }
    }
}

impl std::str::FromStr for PayloadRounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full_precision" | "full" => Ok(Self::FullPrecision),
            "two_decimals" | "2dp" => Ok(Self::TwoDecimals),
            _ => Err(format!("Unknown rounding policy: {s}")),
        }
    }
}

/// What to do when discounts or withholding push a total below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeTotals {
    /// Keep negative totals as computed.
    #[default]
    Allow,
    /// Floor totals at zero.
    ClampToZero,
}

impl NegativeTotals {
    /// Applies the policy to a single total.
    #[must_use]
    pub fn apply(self, value: Decimal) -> Decimal {
        match self {
            Self::Allow => value,
            Self::ClampToZero => value.max(Decimal::ZERO),
        }
    }
}

impl std::str::FromStr for NegativeTotals {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "clamp_to_zero" | "clamp" => Ok(Self::ClampToZero),
            _ => Err(format!("Unknown negative total policy: {s}")),
        }
    }
}
