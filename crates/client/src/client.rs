//! Backend REST client.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/settings` | [`BackendClient::fetch_settings`] |
//! | GET    | `/api/customers` | [`BackendClient::list_customers`] |
//! | GET    | `/api/products` | [`BackendClient::list_products`] |
//! | POST   | `/api/<resource>` | [`BackendClient::create_document`] |
//! | GET    | `/api/<resource>/<id>` | [`BackendClient::get_document`] |
//! | PUT    | `/api/<resource>/<id>` | [`BackendClient::update_document`] |
//! | DELETE | `/api/<resource>/<id>` | [`BackendClient::delete_document`] |

use std::time::Duration;

use bizdocs_core::document::DocumentKind;
use bizdocs_core::settings::CompanySettings;
use bizdocs_core::summary::ProductRef;
use bizdocs_shared::config::BackendConfig;
use bizdocs_shared::types::DocumentId;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::types::{Customer, ListResponse, SavedDocument};

/// Client for the bizdocs backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the token is not a valid header
    /// value, or [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = config.api_token.as_deref().filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ClientError::Config("API token is not a valid header value".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    async fn send(endpoint: &str, request: RequestBuilder) -> Result<Response, ClientError> {
        debug!(endpoint, "Sending request");
        let resp = request.send().await.map_err(|e| ClientError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            warn!(endpoint, status, "Backend returned an error");
            return Err(ClientError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(endpoint: &str, resp: Response) -> Result<T, ClientError> {
        resp.json().await.map_err(|e| ClientError::Decode {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let endpoint = format!("GET /api/{path}");
        let resp = Self::send(&endpoint, self.http.get(self.url(path))).await?;
        Self::decode(&endpoint, resp).await
    }

    /// Fetches the company settings.
    ///
    /// Calls `GET {base_url}/api/settings`.
    pub async fn fetch_settings(&self) -> Result<CompanySettings, ClientError> {
        self.get_json("settings").await
    }

    /// Lists customers and suppliers.
    ///
    /// Calls `GET {base_url}/api/customers`.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ClientError> {
        self.get_json::<ListResponse<Customer>>("customers")
            .await
            .map(ListResponse::into_vec)
    }

    /// Lists catalogue products.
    ///
    /// Calls `GET {base_url}/api/products`.
    pub async fn list_products(&self) -> Result<Vec<ProductRef>, ClientError> {
        self.get_json::<ListResponse<ProductRef>>("products")
            .await
            .map(ListResponse::into_vec)
    }

    /// Creates a document from a save payload.
    ///
    /// Calls `POST {base_url}/api/<resource>`.
    pub async fn create_document<P>(
        &self,
        kind: DocumentKind,
        payload: &P,
    ) -> Result<SavedDocument, ClientError>
    where
        P: Serialize + ?Sized,
    {
        let endpoint = format!("POST /api/{}", kind.resource());
        let request = self.http.post(self.url(kind.resource())).json(payload);
        let resp = Self::send(&endpoint, request).await?;
        let saved: SavedDocument = Self::decode(&endpoint, resp).await?;
        debug!(kind = %kind, id = %saved.id, "Document created");
        Ok(saved)
    }

    /// Replaces a saved document.
    ///
    /// Calls `PUT {base_url}/api/<resource>/<id>`.
    pub async fn update_document<P>(
        &self,
        kind: DocumentKind,
        id: DocumentId,
        payload: &P,
    ) -> Result<SavedDocument, ClientError>
    where
        P: Serialize + ?Sized,
    {
        let path = format!("{}/{id}", kind.resource());
        let endpoint = format!("PUT /api/{path}");
        let request = self.http.put(self.url(&path)).json(payload);
        let resp = Self::send(&endpoint, request).await?;
        let saved = Self::decode(&endpoint, resp).await?;
        debug!(kind = %kind, %id, "Document updated");
        Ok(saved)
    }

    /// Fetches a saved document, `None` if it does not exist.
    ///
    /// Calls `GET {base_url}/api/<resource>/<id>`.
    pub async fn get_document<T: DeserializeOwned>(
        &self,
        kind: DocumentKind,
        id: DocumentId,
    ) -> Result<Option<T>, ClientError> {
        match self.get_json(&format!("{}/{id}", kind.resource())).await {
            Ok(doc) => Ok(Some(doc)),
            Err(ClientError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Deletes a saved document.
    ///
    /// Calls `DELETE {base_url}/api/<resource>/<id>`.
    pub async fn delete_document(&self, kind: DocumentKind, id: DocumentId) -> Result<(), ClientError> {
        let path = format!("{}/{id}", kind.resource());
        let endpoint = format!("DELETE /api/{path}");
        Self::send(&endpoint, self.http.delete(self.url(&path))).await?;
        debug!(kind = %kind, %id, "Document deleted");
        Ok(())
    }
}
