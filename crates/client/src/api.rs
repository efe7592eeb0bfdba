//! REST client for the content API endpoints.
//!
//! Wraps the content CRUD endpoints using [`reqwest`]. Each operation is a
//! single attempt: no retries, no backoff, and no timeout beyond the
//! transport defaults -- retry policy belongs to the caller.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};

use quill_core::types::DbId;

use crate::error::ApiError;
use crate::types::{Content, CreateContent, UpdateContent};

/// Environment variable naming the API base URL.
pub const BASE_URL_ENV: &str = "CONTENT_API_BASE_URL";

/// Base URL used when [`BASE_URL_ENV`] is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for a content API instance.
pub struct ContentClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    /// Create a new client for the given base URL, e.g. `http://host:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across several clients).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a client from [`BASE_URL_ENV`], falling back to the local
    /// development endpoint.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Fetch all content records.
    ///
    /// Sends `GET /content`.
    pub async fn get_all(&self) -> Result<Vec<Content>, ApiError> {
        let response = self.request(Method::GET, "/content").send().await?;
        Self::parse_response(response).await
    }

    /// Fetch a single record by id.
    ///
    /// Sends `GET /content/{id}`.
    pub async fn get_by_id(&self, id: DbId) -> Result<Content, ApiError> {
        let response = self
            .request(Method::GET, &format!("/content/{id}"))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create a record from the given payload.
    ///
    /// Sends `POST /content` and returns the server's representation of the
    /// created record.
    pub async fn create(&self, input: &CreateContent) -> Result<Content, ApiError> {
        let response = self
            .request(Method::POST, "/content")
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Partially update a record; only the fields set in `input` are sent.
    ///
    /// Sends `PUT /content/{id}` and returns the updated representation.
    pub async fn update(&self, id: DbId, input: &UpdateContent) -> Result<Content, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/content/{id}"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Delete a record by id.
    ///
    /// Sends `DELETE /content/{id}`. The expected 204 reply carries no body
    /// and none is read.
    pub async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/content/{id}"))
            .send()
            .await?;
        Self::ensure_success(response)?;
        Ok(())
    }

    // ---- private helpers ----

    /// Build a request against the base URL with the JSON content type
    /// attached. Every call sends `Content-Type: application/json`
    /// regardless of method or body.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`ApiError::Status`] carrying the status
    /// code and its canonical status text on failure.
    fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response)?;
        Ok(response.json::<T>().await?)
    }
}
