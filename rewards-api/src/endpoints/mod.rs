pub mod balance;
pub mod purchase;
pub mod redeem;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Kind of a rewards transaction as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Earned,
    Redeemed,
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Earned => f.write_str("EARNED"),
            Self::Redeemed => f.write_str("REDEEMED"),
        }
    }
}

/// Monetary amount attached to a transaction.
///
/// Decimal columns come back from the service as strings (`"5000.00"`), plain
/// floats as numbers; both deserialize into the same value.
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Money(f64);

impl Money {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Money> for f64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self(value)),
            Raw::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid money amount '{}'", text))),
        }
    }
}
