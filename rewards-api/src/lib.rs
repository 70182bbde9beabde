pub mod endpoints;
mod error;
pub mod repositories;

pub use crate::error::{ErrorDetail, RewardsApiError};
use repositories::*;
use reqwest::Method;
pub use reqwest::StatusCode;
use tower_api_client::{Request as ApiRequest, RequestData};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/rewards";

/// HTTP client for the rewards service.
///
/// Requests are described with `tower_api_client::Request` and sent with
/// reqwest. Endpoint paths go on the wire exactly as declared, trailing slash
/// included, since the service only routes the slashed form.
pub struct Client {
    http_client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client rooted at the rewards endpoint, e.g. `http://host/api/rewards`
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Join the base URL and an endpoint path, keeping the endpoint's trailing slash
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, RewardsApiError>
    where
        R: ApiRequest,
    {
        let method = Method::from_bytes(R::METHOD.as_str().as_bytes())
            .map_err(|_| RewardsApiError::Unsupported("HTTP method"))?;
        let url = self.url(&request.endpoint());

        let builder = self.http_client.request(method, &url);
        let builder = match request.data() {
            RequestData::Empty => builder,
            RequestData::Json(data) => builder.json(data),
            RequestData::Form(_) => return Err(RewardsApiError::Unsupported("form body")),
            RequestData::Query(_) => return Err(RewardsApiError::Unsupported("query string")),
        };

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<R::Response>().await?)
        } else {
            let body = response.text().await?;
            Err(RewardsApiError::from_response(status, body))
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub struct Request;

impl Request {
    pub fn rewards() -> RewardsRepository {
        RewardsRepository::new()
    }
}
