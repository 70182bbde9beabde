use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewardsApiError {
    /// The service answered with a non-success status and a structured error body
    #[error("({0}) {1}")]
    Rewards(StatusCode, ErrorDetail),
    /// Non-success status whose body is not a rewards error
    #[error("Unexpected response ({0}): {1}")]
    Status(StatusCode, String),
    /// Connection failures and response bodies that do not decode
    #[error("Internal error: {0}")]
    Internal(#[from] reqwest::Error),
    /// The request asks for a body encoding the client does not send
    #[error("Unsupported request: {0}")]
    Unsupported(&'static str),
}

impl RewardsApiError {
    /// Classify a non-success response by its body
    pub fn from_response(status: StatusCode, body: String) -> Self {
        match serde_json::from_str::<ErrorDetail>(&body) {
            Ok(detail) => RewardsApiError::Rewards(status, detail),
            Err(_) => RewardsApiError::Status(status, body),
        }
    }

    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            RewardsApiError::Rewards(_, detail) => Some(detail),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RewardsApiError::Rewards(status, _) | RewardsApiError::Status(status, _) => {
                Some(*status)
            }
            RewardsApiError::Internal(e) => e.status(),
            RewardsApiError::Unsupported(_) => None,
        }
    }
}

/// Error body returned by the rewards service.
///
/// Validation and generic failures carry `code`; the redeem endpoint reports an
/// insufficient balance with `current_balance` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<u64>,
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}: {}", code, self.error),
            None => f.write_str(&self.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_client_error_becomes_rewards_error() {
        let err = RewardsApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":"Insufficient points","code":"INSUFFICIENT"}"#.to_string(),
        );

        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        let detail = err.detail().unwrap();
        assert_eq!(detail.error, "Insufficient points");
        assert_eq!(detail.code.as_deref(), Some("INSUFFICIENT"));
        assert_eq!(err.to_string(), "(400 Bad Request) INSUFFICIENT: Insufficient points");
    }

    #[test]
    fn redeem_error_without_code_is_still_structured() {
        let err = RewardsApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":"Insufficient points. Balance: 3, Requested: 10","current_balance":3}"#
                .to_string(),
        );

        let detail = err.detail().unwrap();
        assert_eq!(detail.code, None);
        assert_eq!(detail.current_balance, Some(3));
    }

    #[test]
    fn unparseable_body_keeps_status() {
        let err = RewardsApiError::from_response(
            StatusCode::BAD_GATEWAY,
            "<html>bad gateway</html>".to_string(),
        );

        assert!(matches!(err, RewardsApiError::Status(..)));
        assert!(err.detail().is_none());
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn field_errors_without_error_key_are_unstructured() {
        let err = RewardsApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"amount":["The amount must be a positive number."]}"#.to_string(),
        );

        assert!(matches!(err, RewardsApiError::Status(..)));
    }
}
