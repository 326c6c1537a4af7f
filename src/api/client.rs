// Google Tasks API HTTP client.
// Handles authentication and request/response status processing.

use log::debug;
use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{GtasksError, Result};

const TASKS_API_BASE: &str = "https://tasks.googleapis.com/tasks/v1";

/// Google Tasks API client holding an authenticated HTTP client.
pub struct TasksClient {
    client: Client,
    base_url: String,
}

impl TasksClient {
    /// Create a new client with the given OAuth bearer token.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, TASKS_API_BASE)
    }

    /// Create a client against a non-default base URL (used by tests).
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| GtasksError::Other(e.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("gtasks-cli"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GtasksError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the GTASKS_TOKEN environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GTASKS_TOKEN").map_err(|_| GtasksError::MissingToken)?;
        Self::new(&token)
    }

    /// Make a GET request with query parameters.
    pub(super) async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(GtasksError::Api)?;

        check_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub(super) async fn post_json<B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(GtasksError::Api)?;

        check_response(response).await
    }

    /// Make a DELETE request.
    pub(super) async fn delete(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(GtasksError::Api)?;

        check_response(response).await
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(response),
        StatusCode::UNAUTHORIZED => Err(GtasksError::Unauthorized),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(GtasksError::NotFound(url))
        }
        status => Err(GtasksError::Other(format!(
            "HTTP {}: {}",
            status,
            response.text().await.unwrap_or_default()
        ))),
    }
}
