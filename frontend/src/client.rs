//! Typed REST client for the catalog API.
//!
//! One method per endpoint, no retries; every failure is reported
//! synchronously to the caller so the mirror is only touched after a
//! confirmed success.

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::product::{Product, ProductDraft};

/// Failures surfaced by [`ApiClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an error status; the message comes from the
    /// `{"error": ...}` payload when one is present.
    #[error("{message}")]
    Api {
        /// HTTP status the server answered with.
        status: StatusCode,
        /// Message surfaced to the user.
        message: String,
    },

    /// The request never completed or the body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin typed wrapper over the four catalog endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL, e.g. `http://localhost:3001`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.http.get(self.url("/api/products")).send().await?;
        decode(response).await
    }

    /// Create a product and return the server's stored representation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] carrying the server's validation or
    /// conflict message, or [`ClientError::Transport`].
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ClientError> {
        let response = self
            .http
            .post(self.url("/api/products"))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn delete_product(&self, id: i32) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/products/{id}")))
            .send()
            .await?;
        decode::<serde_json::Value>(response).await.map(|_| ())
    }

    /// Set a product's quantity to an absolute target and return the
    /// server's updated representation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn update_quantity(&self, id: i32, quantity: i32) -> Result<Product, ClientError> {
        let response = self
            .http
            .patch(self.url(&format!("/api/products/{id}/quantity")))
            .json(&serde_json::json!({ "quantity": quantity }))
            .send()
            .await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let body = response.text().await.unwrap_or_default();
    debug!(%status, "api call rejected");
    Err(ClientError::Api {
        status,
        message: error_message(status, &body),
    })
}

/// Extract the server's `{"error": ...}` message, falling back to the bare
/// status when the body is not the expected envelope.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|payload| payload.error)
        .unwrap_or_else(|_| format!("request failed with status {status}"))
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}
