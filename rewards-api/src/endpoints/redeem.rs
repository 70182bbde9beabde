use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Requests

/// Redeem points from the balance; the service rejects redemptions above the balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedeemPoints {
    points: u64,
}

impl RedeemPoints {
    pub fn new(points: u64) -> Self {
        Self { points }
    }

    pub fn points(&self) -> u64 {
        self.points
    }
}

impl Request for RedeemPoints {
    type Data = Self;
    type Response = RedeemResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/redeem/".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

// Responses

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemResponse {
    pub message: String,
    pub new_balance: u64,
    #[serde(default)]
    pub points_redeemed: Option<u64>,
}
