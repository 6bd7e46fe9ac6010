//! Numeric coercion for user-entered values.
//!
//! Amounts, quantities, and rates typed into a document form are never
//! rejected while the user is still editing. Anything that does not parse
//! as a number counts as zero.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a user-entered number, falling back to zero.
///
/// Accepts plain decimals (`"1250.50"`, `"-3"`) and scientific notation
/// (`"1e3"`). Empty, blank, or non-numeric input yields `0`.
#[must_use]
pub fn parse_or_zero(input: &str) -> Decimal {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Parses a user-entered number that must not be negative.
///
/// Same as [`parse_or_zero`], with negative values replaced by `0`.
#[must_use]
pub fn to_non_negative_number(input: &str) -> Decimal {
    non_negative(parse_or_zero(input))
}

/// Replaces a negative value with zero.
#[must_use]
pub fn non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}

/// Serde helpers applying the parse-or-zero policy to JSON input.
///
/// Fields may arrive as JSON numbers, numeric strings, `null`, or be absent
/// altogether. Use together with `#[serde(default)]` so missing fields reach
/// the default instead of failing.
pub mod lenient {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{non_negative as clamp, parse_or_zero};

    /// Deserializes any JSON value into a `Decimal`, malformed input is zero.
    pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().map_or(Decimal::ZERO, coerce))
    }

    /// Like [`decimal`], with negative values replaced by zero.
    pub fn non_negative<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        decimal(deserializer).map(clamp)
    }

    /// Quantity field: non-negative, `null` falls back to one unit.
    pub fn quantity<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            None | Some(Value::Null) => Decimal::ONE,
            Some(ref v) => clamp(coerce(v)),
        })
    }

    /// Optional field: absent or `null` is `None`, anything else is coerced.
    pub fn optional<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            None | Some(Value::Null) => None,
            Some(ref v) => Some(coerce(v)),
        })
    }

    /// Default for an absent quantity field.
    #[must_use]
    pub fn one() -> Decimal {
        Decimal::ONE
    }

    fn coerce(value: &Value) -> Decimal {
        match value {
            Value::Number(n) => parse_or_zero(&n.to_string()),
            Value::String(s) => parse_or_zero(s),
            _ => Decimal::ZERO,
        }
    }
}
