/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Authenticated HTTP transport for the OANDA v20 REST API
///
/// Every request carries the bearer token from the configuration. Requests
/// are sent once; failures are returned to the caller untouched.
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a transport bound to the configured base URL and timeout
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Makes a GET request
    pub async fn get<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, None::<&()>, Some(body))
            .await
    }

    /// Makes a PUT request, with or without a body
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, None::<&()>, body).await
    }

    /// Makes a request and deserializes the JSON body
    pub async fn request<Q: Serialize, B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        let auth_header_value = format!("Bearer {}", self.config.credentials.access_token);

        let headers = vec![
            ("Authorization", auth_header_value.as_str()),
            ("Content-Type", "application/json"),
            ("Accept-Datetime-Format", "RFC3339"),
        ];

        let response =
            make_http_request(&self.http_client, method, &url, headers, query, body).await?;
        Ok(response.json().await?)
    }

    /// Builds the full URL of a `/v3` endpoint
    fn url(&self, path: &str) -> String {
        format!(
            "{}/v3/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Makes a single HTTP request and maps non-success statuses to [`AppError`]
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Optional query parameters, url-encoded
/// * `body` - Optional request body, serialized to JSON
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - Transport failure or non-success status
pub async fn make_http_request<Q: Serialize, B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: Option<&Q>,
    body: Option<&B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(q) = query {
        request = request.query(q);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED => {
            error!("Unauthorized: {}", body_text);
            Err(AppError::Unauthorized)
        }
        StatusCode::NOT_FOUND => {
            error!("Not found: {}", body_text);
            Err(AppError::NotFound)
        }
        _ => {
            error!("Request failed with status {}: {}", status, body_text);
            Err(AppError::Api {
                status,
                message: error_message(&body_text),
            })
        }
    }
}

/// Extracts `errorMessage` from a broker error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("errorMessage").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
