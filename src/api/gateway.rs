//! REST gateway for the payroll backend.
//!
//! Joins the base URL with resource paths, attaches the bearer token,
//! decodes JSON bodies and turns non-2xx responses into [`ApiError`]s
//! carrying the server's own message.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::error::ApiError;
use crate::traits::{Headers, HttpClient, Method, Response};

/// Default base URL of the backend API.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

pub struct ApiGateway {
    http: Arc<dyn HttpClient>,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl std::fmt::Debug for ApiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGateway")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl ApiGateway {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            token: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer token; `None` sends requests anonymously.
    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(|p| p.into_inner());
        *guard = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    /// Absolute URL for `path` with percent-encoded query parameters.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    fn headers(&self, accept: &str, has_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), accept.to_string());
        if has_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(token) = self.token() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
        accept: &str,
    ) -> Result<Response, ApiError> {
        let url = self.url(path, query);
        let headers = self.headers(accept, body.is_some());
        debug!("{} {}", method, url);

        let response = self
            .http
            .send(method, &url, body.as_deref(), &headers)
            .await
            .map_err(ApiError::from)?;

        if response.is_success() {
            Ok(response)
        } else {
            let err = ApiError::from_response(response.status, &response.text());
            debug!("{} {} failed: {}", method, url, err);
            Err(err)
        }
    }

    fn decode<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
        if response.body.iter().all(u8::is_ascii_whitespace) {
            // Empty 2xx bodies decode as JSON null
            return serde_json::from_str("null").map_err(ApiError::from);
        }
        response.json().map_err(ApiError::from)
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_json_with_query(path, &[]).await
    }

    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .execute(Method::Get, path, query, None, "application/json")
            .await?;
        Self::decode(&response)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        let response = self
            .execute(Method::Post, path, &[], Some(body), "application/json")
            .await?;
        Self::decode(&response)
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .execute(Method::Post, path, &[], None, "application/json")
            .await?;
        Self::decode(&response)
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        let response = self
            .execute(Method::Put, path, &[], Some(body), "application/json")
            .await?;
        Self::decode(&response)
    }

    /// PATCH with query parameters and no body.
    pub async fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .execute(Method::Patch, path, query, None, "application/json")
            .await?;
        Self::decode(&response)
    }

    /// DELETE; any 2xx body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, &[], None, "application/json")
            .await
            .map(|_| ())
    }

    /// GET a plain-text body.
    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let response = self
            .execute(Method::Get, path, &[], None, "text/plain")
            .await?;
        Ok(response.text())
    }
}
