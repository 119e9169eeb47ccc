//! HTTP client for the object store.
//!
//! [`ObjectsClient`] issues the four CRUD requests and hands back an
//! [`ApiResponse`] whose status and content type the caller checks
//! explicitly. Nothing is retried.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Object collection of the public sandbox.
pub const DEFAULT_API_URL: &str = "https://api.restful-api.dev/objects";

/// Default per-request timeout.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// ApiResponse
// ============================================================================

/// A buffered response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Request method.
    pub method: Method,
    /// Request URL.
    pub url: Url,
    /// Status code.
    pub status: u16,
    /// `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Raw body.
    pub body: String,
}

impl ApiResponse {
    /// Fails unless the status equals `expected`.
    pub fn expect_status(&self, expected: u16) -> Result<&Self> {
        if self.status != expected {
            return Err(Error::unexpected_status(
                &self.method,
                &self.url,
                expected,
                self.status,
            ));
        }
        Ok(self)
    }

    /// Fails unless the content type is `application/json`, parameters aside.
    pub fn expect_json_content(&self) -> Result<&Self> {
        let content_type = self.content_type.as_deref().unwrap_or_default();
        if !content_type.starts_with("application/json") {
            return Err(Error::assertion(
                format!("{} {} content type", self.method, self.url),
                "application/json",
                content_type,
            ));
        }
        Ok(self)
    }

    /// Requires a JSON content type and deserializes the body.
    pub fn expect_json<T: DeserializeOwned>(&self) -> Result<T> {
        self.expect_json_content()?;
        Ok(serde_json::from_str(&self.body)?)
    }
}

// ============================================================================
// ObjectsClient
// ============================================================================

/// Client bound to one object collection URL.
#[derive(Debug, Clone)]
pub struct ObjectsClient {
    http: Client,
    base: Url,
}

impl ObjectsClient {
    /// Creates a client for the collection at `base`.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `base` cannot carry path segments
    /// - [`Error::Http`] if the HTTP client cannot be built
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(Error::config(format!("API URL '{base}' cannot be a base")));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base })
    }

    /// Returns the collection URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Returns the URL of object `id`.
    #[must_use]
    pub fn object_url(&self, id: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    /// `POST` to the collection.
    pub async fn create(&self, body: &Map<String, Value>) -> Result<ApiResponse> {
        self.send(Method::POST, self.base.clone(), Some(body)).await
    }

    /// `GET` one object.
    pub async fn fetch(&self, id: &str) -> Result<ApiResponse> {
        self.send(Method::GET, self.object_url(id), None).await
    }

    /// `PUT` one object.
    pub async fn update(&self, id: &str, body: &Map<String, Value>) -> Result<ApiResponse> {
        self.send(Method::PUT, self.object_url(id), Some(body)).await
    }

    /// `DELETE` one object.
    pub async fn delete(&self, id: &str) -> Result<ApiResponse> {
        self.send(Method::DELETE, self.object_url(id), None).await
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&Map<String, Value>>,
    ) -> Result<ApiResponse> {
        info!(method = %method, url = %url, "Sending request");

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        debug!(
            method = %method,
            url = %url,
            status,
            body = %pretty(&body),
            "Received response"
        );

        Ok(ApiResponse {
            method,
            url,
            status,
            content_type,
            body,
        })
    }
}

/// Pretty-prints `body` when it is JSON.
fn pretty(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .and_then(|v| serde_json::to_string_pretty(&v))
        .unwrap_or_else(|_| body.to_string())
}

// ============================================================================
// Tests
// ============================================================================
