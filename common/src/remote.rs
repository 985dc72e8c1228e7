//! HTTP client for the remote catalog service.
//!
//! Talks JSON to `{base_url}/categories` and `{base_url}/products`. Uses
//! reqwest, which maps onto the browser's `fetch` in WASM builds.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::CatalogApi;
use crate::category::Category;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::product::{NewProduct, Product, ProductId};

// ─── Wire types ──────────────────────────────────────────────────────────────

/// Error body sent with a rejected request. `message` is either a string or a
/// list of per-field complaints.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<ErrorMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    fn into_text(self) -> String {
        match self {
            ErrorMessage::One(s) => s,
            ErrorMessage::Many(parts) => parts.join("; "),
        }
    }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Stateless catalog client. Cloning shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_family = "wasm"))]
        let builder = match config.request_timeout() {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        // Only local TLS backend setup fails here. No request can leave
        // without a client, so it is reported like an unreachable service.
        let http = builder.build().map_err(|e| {
            tracing::error!(error = %e, "HTTP client setup failed");
            CatalogError::Transport(format!("HTTP client setup failed, no request sent: {e}"))
        })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, u32)],
    ) -> Result<T, CatalogError> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, ?query, "GET");
        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| transport_error(&url, e))?;
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "catalog GET failed");
            return Err(CatalogError::RequestFailed {
                status: status.as_u16(),
            });
        }
        decode(&url, &body)
    }
}

impl CatalogApi for HttpCatalogClient {
    async fn fetch_categories(&self, limit: u32) -> Result<Vec<Category>, CatalogError> {
        self.get_json("/categories", &[("limit", limit)]).await
    }

    async fn fetch_products(&self, limit: u32, offset: u32) -> Result<Vec<Product>, CatalogError> {
        self.get_json("/products", &[("limit", limit), ("offset", offset)])
            .await
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_json(&format!("/products/{id}"), &[]).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, CatalogError> {
        let url = self.config.endpoint("/products");
        tracing::debug!(%url, title = %product.title, "POST");
        let resp = self
            .http
            .post(&url)
            .json(product)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| transport_error(&url, e))?;
        if !status.is_success() {
            let err = rejection(status.as_u16(), &body);
            tracing::warn!(%url, status = status.as_u16(), error = %err, "product creation refused");
            return Err(err);
        }
        decode(&url, &body)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn transport_error(url: &str, err: reqwest::Error) -> CatalogError {
    tracing::warn!(%url, error = %err, "catalog request did not complete");
    CatalogError::Transport(err.to_string())
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(%url, error = %e, "catalog response did not decode");
        CatalogError::Decode(e.to_string())
    })
}

/// Classify a non-success response: an explanation makes it a rejection,
/// anything else is a bare failure.
fn rejection(status: u16, body: &str) -> CatalogError {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(ErrorMessage::into_text)
        .filter(|m| !m.trim().is_empty())
        .map(CatalogError::ValidationRejected)
        .unwrap_or(CatalogError::RequestFailed { status })
}
