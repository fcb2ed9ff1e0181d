// src/services/gateway.rs
//
// Plumbing shared by every action and query function: token decoding,
// one request per call, and mapping of the outcome into the result shapes.
//
// RULES:
// - Actions never see AppError; failures become FieldErrors
// - Queries never fail their caller; failures are logged and emptied
// - Nothing is retried

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::application::SessionContext;
use crate::crypto::CredentialCodec;
use crate::domain::FieldErrors;
use crate::error::{AppError, AppResult};
use crate::events::{DomainEvent, EventBus};
use crate::integrations::{ApiRequest, ApiResponse, ApiTransport, PageEnvelope, ResponseEnvelope};
use crate::services::query::Page;

pub const INTERNAL_ERROR: &str = "Some internal error occurred. Please try again later.";
pub const INVALID_SESSION: &str = "Invalid session. Please login again.";

/// How one action judges its response.
#[derive(Debug, Clone, Copy)]
pub struct Submission {
    /// The only status that counts as success.
    pub expected_status: u16,
    /// Fallback for a 2xx that is not `expected_status`.
    pub rejected: &'static str,
    /// Fallback for a non-2xx response.
    pub errored: &'static str,
}

pub struct ApiGateway {
    transport: Arc<dyn ApiTransport>,
    codec: Arc<CredentialCodec>,
    event_bus: Arc<EventBus>,
}

impl ApiGateway {
    pub fn new(
        transport: Arc<dyn ApiTransport>,
        codec: Arc<CredentialCodec>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            transport,
            codec,
            event_bus,
        }
    }

    pub fn emit<E: DomainEvent + 'static>(&self, event: E) {
        self.event_bus.emit(event);
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    /// Decoded bearer token, or the invalid-session form error.
    pub fn authorize(&self, ctx: &SessionContext) -> Result<String, FieldErrors> {
        self.bearer(ctx).map_err(|_| FieldErrors::form(INVALID_SESSION))
    }

    /// Sends one action request and maps the outcome.
    pub async fn submit(
        &self,
        request: ApiRequest,
        submission: &Submission,
    ) -> Result<ApiResponse, FieldErrors> {
        let path = request.path.clone();
        match self.transport.send(request).await {
            Ok(response) if response.status == submission.expected_status => Ok(response),
            Ok(response) => {
                let fallback = if response.is_success() {
                    submission.rejected
                } else {
                    submission.errored
                };
                let message = server_message(&response).unwrap_or_else(|| fallback.to_string());
                log::info!("{} rejected ({}): {}", path, response.status, message);
                Err(FieldErrors::form(message))
            }
            Err(e) => {
                log::error!("{} failed: {}", path, e);
                Err(FieldErrors::form(INTERNAL_ERROR))
            }
        }
    }

    /// Form error for a request that could not even be built.
    pub fn internal(error: AppError) -> FieldErrors {
        log::error!("Failed to build request: {}", error);
        FieldErrors::form(INTERNAL_ERROR)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Decoded bearer token.
    pub fn bearer(&self, ctx: &SessionContext) -> AppResult<String> {
        if !ctx.has_token() {
            return Err(AppError::InvalidSession);
        }
        let token = self.codec.decode(ctx.encoded_token());
        if token.is_empty() {
            return Err(AppError::InvalidSession);
        }
        Ok(token)
    }

    /// Sends an authenticated GET-style request and returns the envelope of
    /// a 2xx response.
    pub async fn fetch(
        &self,
        ctx: &SessionContext,
        request: ApiRequest,
    ) -> AppResult<ResponseEnvelope<Value>> {
        let token = self.bearer(ctx)?;
        let response = self.transport.send(request.bearer(token)).await?;
        if !response.is_success() {
            return Err(AppError::Server {
                status: response.status,
                message: server_message(&response)
                    .unwrap_or_else(|| "Request failed".to_string()),
            });
        }
        Ok(ResponseEnvelope::lenient(&response.body))
    }

    /// Single record carried in `body`.
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        ctx: &SessionContext,
        request: ApiRequest,
    ) -> AppResult<T> {
        self.fetch(ctx, request).await?.into_body()
    }

    /// `body: { content, totalElements }`, or an empty page on any failure.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        ctx: &SessionContext,
        request: ApiRequest,
        what: &str,
    ) -> Page<T> {
        let result: AppResult<Page<T>> = async {
            match self.fetch(ctx, request).await?.body {
                None | Some(Value::Null) => Ok(Page::empty()),
                Some(body) => {
                    let page: PageEnvelope<T> = serde_json::from_value(body)?;
                    Ok(Page {
                        items: page.content,
                        total_count: page.total_elements,
                    })
                }
            }
        }
        .await;
        empty_on_failure(result, what)
    }

    /// Search by a unique key: `body` is one record, wrapped into a page of
    /// one. The total falls back to 1.
    pub async fn fetch_single_as_page<T: DeserializeOwned>(
        &self,
        ctx: &SessionContext,
        request: ApiRequest,
        what: &str,
    ) -> Page<T> {
        let result: AppResult<Page<T>> = async {
            match self.fetch(ctx, request).await?.body {
                None | Some(Value::Null) => Ok(Page::empty()),
                Some(body) => {
                    let total = body
                        .get("totalElements")
                        .and_then(Value::as_u64)
                        .filter(|total| *total > 0)
                        .unwrap_or(1);
                    let item: T = serde_json::from_value(body)?;
                    Ok(Page {
                        items: vec![item],
                        total_count: total,
                    })
                }
            }
        }
        .await;
        empty_on_failure(result, what)
    }

    /// `body: T[]`, or an empty list on any failure.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        ctx: &SessionContext,
        request: ApiRequest,
        what: &str,
    ) -> Vec<T> {
        let result: AppResult<Vec<T>> = async {
            match self.fetch(ctx, request).await?.body {
                None | Some(Value::Null) => Ok(Vec::new()),
                Some(body) => Ok(serde_json::from_value(body)?),
            }
        }
        .await;
        match result {
            Ok(items) => items,
            Err(e) => {
                log::error!("Failed to fetch {}: {}", what, e);
                Vec::new()
            }
        }
    }
}

fn empty_on_failure<T>(result: AppResult<Page<T>>, what: &str) -> Page<T> {
    match result {
        Ok(page) => page,
        Err(e) => {
            log::error!("Failed to fetch {}: {}", what, e);
            Page::empty()
        }
    }
}

/// Non-blank `exceptionMessage` of a response body.
fn server_message(response: &ApiResponse) -> Option<String> {
    ResponseEnvelope::lenient(&response.body)
        .exception_message
        .filter(|message| !message.trim().is_empty())
}
