use crate::events::{ActionError, DataEvent};
use crate::state::Operation;
use rewards_api::{Client, Request};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs rewards requests and reports every outcome as a [`DataEvent`].
///
/// Each public method is one operation and always ends with exactly one
/// `OperationFinished`.
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(api_client: Arc<Client>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            api_client,
            data_tx,
        }
    }

    /// Fetch the authoritative balance
    pub async fn load_balance(&self) {
        tracing::info!("Loading balance");
        let succeeded = self.fetch_balance().await;
        self.finish(Operation::Refresh, succeeded);
    }

    /// Record a purchase, then refresh the balance if it was accepted
    pub async fn add_points(&self, amount: f64) {
        tracing::info!(amount, "Recording purchase");

        let req = Request::rewards().purchase(amount);
        let succeeded = match self.api_client.send(req).await {
            Ok(response) => {
                tracing::info!("Purchase recorded: {}", response.message);
                self.emit(DataEvent::PurchaseRecorded { response });
                self.fetch_balance().await
            }
            Err(e) => {
                tracing::error!("Failed to record purchase: {}", e);
                self.emit(DataEvent::PurchaseFailed {
                    error: ActionError::from(e),
                });
                false
            }
        };

        self.finish(Operation::Purchase, succeeded);
    }

    /// Redeem points, then refresh the balance if the redemption went through
    pub async fn redeem(&self, points: u64) {
        tracing::info!(points, "Redeeming points");

        let req = Request::rewards().redeem(points);
        let succeeded = match self.api_client.send(req).await {
            Ok(response) => {
                tracing::info!("Points redeemed: {}", response.message);
                self.emit(DataEvent::PointsRedeemed { response });
                self.fetch_balance().await
            }
            Err(e) => {
                tracing::error!("Failed to redeem points: {}", e);
                self.emit(DataEvent::RedeemFailed {
                    error: ActionError::from(e),
                });
                false
            }
        };

        self.finish(Operation::Redeem, succeeded);
    }

    async fn fetch_balance(&self) -> bool {
        match self.api_client.send(Request::rewards().balance()).await {
            Ok(reward) => {
                tracing::info!("Loaded balance: {} points", reward.total_points);
                self.emit(DataEvent::BalanceLoaded { reward });
                true
            }
            Err(e) => {
                tracing::error!("Failed to load balance: {}", e);
                self.emit(DataEvent::BalanceLoadFailed {
                    error: ActionError::from(e),
                });
                false
            }
        }
    }

    fn finish(&self, operation: Operation, succeeded: bool) {
        self.emit(DataEvent::OperationFinished {
            operation,
            succeeded,
        });
    }

    fn emit(&self, event: DataEvent) {
        // The receiver only goes away during shutdown
        if self.data_tx.send(event).is_err() {
            tracing::debug!("Data channel closed, dropping event");
        }
    }
}
