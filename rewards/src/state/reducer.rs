use super::{AppState, Feedback, LoadingState, Operation};
use crate::events::DataEvent;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::BalanceLoaded { reward } => {
            tracing::debug!("Balance refreshed: {} points", reward.total_points);
            state.balance = reward.total_points;
            state.reward = Some(reward);
        }

        // Keep showing the last known balance
        DataEvent::BalanceLoadFailed { error } => {
            tracing::warn!("Balance refresh failed: {}", error);
            state.feedback = Some(Feedback::from_error(&error));
        }

        // The reported new_balance is ignored; the follow-up refresh is authoritative
        DataEvent::PurchaseRecorded { response } => {
            tracing::debug!("Purchase recorded, server reports {}", response.new_balance);
            state.feedback = Some(Feedback::success(response.message));
        }

        DataEvent::PurchaseFailed { error } => {
            tracing::warn!("Purchase failed: {}", error);
            state.feedback = Some(Feedback::from_error(&error));
        }

        DataEvent::PointsRedeemed { response } => {
            tracing::debug!("Points redeemed, server reports {}", response.new_balance);
            state.feedback = Some(Feedback::success(response.message));
        }

        DataEvent::RedeemFailed { error } => {
            tracing::warn!("Redeem failed: {}", error);
            state.feedback = Some(Feedback::from_error(&error));
        }

        DataEvent::OperationFinished {
            operation,
            succeeded,
        } => {
            if state.in_flight != Some(operation) {
                tracing::warn!(
                    "{:?} finished but {:?} was in flight",
                    operation,
                    state.in_flight
                );
                return;
            }
            state.in_flight = None;

            state.loading = if succeeded {
                LoadingState::Loaded
            } else {
                let message = state
                    .feedback
                    .as_ref()
                    .map(|feedback| feedback.message.clone())
                    .unwrap_or_default();
                LoadingState::Error(message)
            };

            if operation == Operation::Purchase {
                if let Some(dashboard) = state.dashboard_mut() {
                    dashboard.purchase_input.clear();
                }
            }
        }
    }
}
