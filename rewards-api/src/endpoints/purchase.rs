use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Requests

/// Register a purchase; the service converts the amount into points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordPurchase {
    amount: f64,
}

impl RecordPurchase {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Request for RecordPurchase {
    type Data = Self;
    type Response = PurchaseResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/purchase/".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

// Responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub message: String,
    pub new_balance: u64,
    #[serde(default)]
    pub amount_processed: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_just_the_amount() {
        let body = serde_json::to_value(RecordPurchase::new(5000.0)).unwrap();
        assert_eq!(body, serde_json::json!({ "amount": 5000.0 }));
    }
}
