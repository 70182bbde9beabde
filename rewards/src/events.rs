use rewards_api::{
    endpoints::{balance::Reward, purchase::PurchaseResponse, redeem::RedeemResponse},
    RewardsApiError,
};

use crate::state::Operation;

/// Commands to execute (user actions → background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Rewards actions
    LoadBalance,
    RecordPurchase { amount: f64 },
    RedeemPoints { points: u64 },

    // Purchase form
    AppendPurchaseChar(char),
    DeletePurchaseChar,
    FocusNext,
    FocusPrevious,
    DismissFeedback,

    // Navigation
    NavigateBack,
    NavigateToLogs,
    ToggleHelp,

    // Log screen
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    BalanceLoaded {
        reward: Reward,
    },
    BalanceLoadFailed {
        error: ActionError,
    },

    PurchaseRecorded {
        response: PurchaseResponse,
    },
    PurchaseFailed {
        error: ActionError,
    },

    PointsRedeemed {
        response: RedeemResponse,
    },
    RedeemFailed {
        error: ActionError,
    },

    /// Last event of every operation; clears the in-flight marker and loading state
    OperationFinished {
        operation: Operation,
        succeeded: bool,
    },
}

/// Why a rewards request failed, as far as the dashboard cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The service explained itself with an error body
    Api {
        message: String,
        code: Option<String>,
    },
    /// No usable response: connection refused, timeout, unexpected body
    Connection(String),
}

impl From<RewardsApiError> for ActionError {
    fn from(err: RewardsApiError) -> Self {
        match err {
            RewardsApiError::Rewards(_, detail) => ActionError::Api {
                message: detail.error,
                code: detail.code,
            },
            other => ActionError::Connection(other.to_string()),
        }
    }
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::Api {
                message,
                code: Some(code),
            } => write!(f, "{} ({})", message, code),
            ActionError::Api { message, code: None } => f.write_str(message),
            ActionError::Connection(reason) => write!(f, "connection error: {}", reason),
        }
    }
}
