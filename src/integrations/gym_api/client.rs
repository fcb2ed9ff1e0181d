// src/integrations/gym_api/client.rs
//
// reqwest adapter for the gym backend.
//
// RULES:
// - This is INFRASTRUCTURE: no validation, no outcome mapping
// - Every received response is returned, whatever its status
// - Only a missing response becomes an error

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method};
use serde_json::Value;

use super::transport::{ApiRequest, ApiResponse, ApiTransport, HttpMethod};
use crate::error::{AppError, AppResult};

pub struct GymApiClient {
    base_url: String,
    http_client: Client,
}

impl GymApiClient {
    /// `base_url` must end with `/`; request paths are appended to it.
    /// Without a timeout the reqwest default applies.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    fn method_for(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// JSON if it parses, the raw text otherwise, `Null` when empty.
    fn parse_body(text: &str) -> Value {
        if text.trim().is_empty() {
            return Value::Null;
        }
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    }
}

#[async_trait]
impl ApiTransport for GymApiClient {
    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        let url = self.url_for(&request.path);
        log::debug!("{:?} {}", request.method, url);

        let mut builder = self
            .http_client
            .request(Self::method_for(request.method), &url)
            .header(header::ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::warn!("Request to {} failed: {}", url, e);
            AppError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        log::debug!("{} -> {}", url, status);
        Ok(ApiResponse::new(status, Self::parse_body(&text)))
    }
}
