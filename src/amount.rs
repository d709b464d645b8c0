//! Monetary amounts as SQLite stores them.

use std::ops::Sub;

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

/// An amount of money spent or earned.
///
/// SQLite keeps numbers as either integers or reals, and so does this type.
/// Whole numbers sent as JSON integers come back as JSON integers, e.g. `5000`
/// rather than `5000.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// A whole amount.
    Integer(i64),
    /// A fractional amount.
    Real(f64),
}

impl Amount {
    /// The integer zero, which is what an empty sum evaluates to.
    pub const ZERO: Amount = Amount::Integer(0);

    /// Whether the amount is zero, in which case it counts as not provided.
    pub fn is_zero(&self) -> bool {
        match *self {
            Amount::Integer(value) => value == 0,
            Amount::Real(value) => value == 0.0,
        }
    }

    /// The amount as a float.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Amount::Integer(value) => value as f64,
            Amount::Real(value) => value,
        }
    }
}

/// Subtraction stays in integers when both sides are integers and the result
/// fits, otherwise it is done in floating point.
impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Amount::Integer(lhs), Amount::Integer(rhs)) => lhs
                .checked_sub(rhs)
                .map(Amount::Integer)
                .unwrap_or_else(|| Amount::Real(lhs as f64 - rhs as f64)),
            (lhs, rhs) => Amount::Real(lhs.as_f64() - rhs.as_f64()),
        }
    }
}

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match *self {
            Amount::Integer(value) => ToSqlOutput::from(value),
            Amount::Real(value) => ToSqlOutput::from(value),
        })
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(value) => Ok(Amount::Integer(value)),
            ValueRef::Real(value) => Ok(Amount::Real(value)),
            // A column without numeric affinity may hold amounts as text.
            ValueRef::Text(_) => {
                let text = value.as_str()?.trim();

                text.parse::<i64>()
                    .map(Amount::Integer)
                    .or_else(|_| text.parse::<f64>().map(Amount::Real))
                    .map_err(|error| FromSqlError::Other(Box::new(error)))
            }
            ValueRef::Null | ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}
