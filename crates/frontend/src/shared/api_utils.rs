//! API utilities for frontend-backend communication
//!
//! Builds backend URLs from configuration and wraps `gloo-net` requests so
//! every view gets the same error mapping.

use crate::shared::config::config;
use contracts::shared::ErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failure of a backend call, already phrased for the operator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Błąd połączenia z serwerem: {0}")]
    Network(String),

    #[error("{}", http_message(*.status, .message))]
    Http { status: u16, message: Option<String> },

    #[error("Niepoprawna odpowiedź serwera: {0}")]
    Parse(String),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Map a non-2xx response body to an error, picking up `message` if present
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: ErrorBody::message_from(body),
        }
    }
}

fn http_message(status: u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("Serwer zwrócił błąd HTTP {}", status),
    }
}

/// Get the base URL for API requests
///
/// `[api] base_url` wins when set. Otherwise the URL is built from the
/// current window location with the configured backend port.
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.trim().is_empty() {
        return api.base_url.trim().trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a relative path such as `leki/12`
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} -> HTTP {}", response.url(), status);
    Err(ApiError::from_status(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}

fn with_body<B: Serialize>(
    request: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<Request, ApiError> {
    request
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = Request::get(&api_url(path))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = send(request).await?;
    read_json(response).await
}

/// POST a JSON body and decode the JSON response
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_body(Request::post(&api_url(path)), body)?;
    let response = send(request).await?;
    read_json(response).await
}

/// POST a JSON body, ignoring whatever the backend answers
pub async fn post(path: &str, body: &impl Serialize) -> Result<(), ApiError> {
    let request = with_body(Request::post(&api_url(path)), body)?;
    send(request).await.map(|_| ())
}

pub async fn put(path: &str, body: &impl Serialize) -> Result<(), ApiError> {
    let request = with_body(Request::put(&api_url(path)), body)?;
    send(request).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = Request::delete(&api_url(path))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await.map(|_| ())
}
