use super::{Money, TransactionType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::Request;

// Common

/// Point balance of the current user, owned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(default)]
    pub username: Option<String>,
    pub total_points: u64,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub transactions: Option<Vec<RewardTransaction>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardTransaction {
    pub id: u64,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub transaction_type_display: Option<String>,
    pub points: i64,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
}

impl RewardTransaction {
    /// Human readable label, falling back to the raw type
    pub fn label(&self) -> Cow<'_, str> {
        match &self.transaction_type_display {
            Some(display) => Cow::Borrowed(display),
            None => Cow::Owned(self.transaction_type.to_string()),
        }
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct GetBalance;

impl GetBalance {
    pub fn new() -> Self {
        Self
    }
}

impl Request for GetBalance {
    type Data = ();
    type Response = Reward;

    fn endpoint(&self) -> Cow<'_, str> {
        "/balance/".into()
    }
}
