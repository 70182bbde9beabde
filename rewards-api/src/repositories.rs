use crate::endpoints::{balance::GetBalance, purchase::RecordPurchase, redeem::RedeemPoints};

#[derive(Default)]
pub struct RewardsRepository;

impl RewardsRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn balance(&self) -> GetBalance {
        GetBalance::new()
    }

    pub fn purchase(&self, amount: f64) -> RecordPurchase {
        RecordPurchase::new(amount)
    }

    pub fn redeem(&self, points: u64) -> RedeemPoints {
        RedeemPoints::new(points)
    }
}
