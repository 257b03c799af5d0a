//! Recording mock HTTP client.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Headers, HttpClient, HttpError, Method, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Body parsed as JSON, if any.
    pub fn json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configured outcome for a request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

impl MockResponse {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }

    pub fn text(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }

    pub fn empty(status: u16) -> Self {
        MockResponse::Success(Response::new(status, Bytes::new()))
    }
}

/// Mock HTTP client keyed by method and URL.
///
/// Lookup tries the exact URL first, then the longest configured prefix,
/// then the default response. Clones share configuration and history.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(Method::Get, "http://api/departments", MockResponse::json(200, json!([])));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<(Method, String), MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, method: Method, url: &str, response: MockResponse) {
        lock(&self.responses).insert((method, url.to_string()), response);
    }

    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Requests whose method matches, in call order.
    pub fn requests_with(&self, method: Method) -> Vec<RecordedRequest> {
        lock(&self.requests)
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn record_request(&self, method: Method, url: &str, headers: &Headers, body: Option<&str>) {
        lock(&self.requests).push(RecordedRequest {
            method,
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(str::to_string),
        });
    }

    fn find_response(&self, method: Method, url: &str) -> Option<MockResponse> {
        let responses = lock(&self.responses);

        if let Some(response) = responses.get(&(method, url.to_string())) {
            return Some(response.clone());
        }

        let prefix_match = responses
            .iter()
            .filter(|((m, pattern), _)| *m == method && url.starts_with(pattern.as_str()))
            .max_by_key(|((_, pattern), _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        lock(&self.default_response).clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.record_request(method, url, headers, body);

        match self.find_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exact_match_and_recording() {
        let client = MockHttpClient::new();
        client.set_response(
            Method::Get,
            "http://api/departments",
            MockResponse::json(200, serde_json::json!([])),
        );

        let response = client
            .get("http://api/departments", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].url, "http://api/departments");
    }

    #[tokio::test]
    async fn test_method_is_part_of_key() {
        let client = MockHttpClient::new();
        client.set_response(Method::Delete, "http://api/jobs/2", MockResponse::empty(204));

        assert!(client.get("http://api/jobs/2", &Headers::new()).await.is_err());
        let response = client.delete("http://api/jobs/2", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 204);
        assert_eq!(client.requests_with(Method::Delete).len(), 1);
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.set_response(Method::Get, "http://api/leaves", MockResponse::text(200, "all"));
        client.set_response(
            Method::Get,
            "http://api/leaves/pending",
            MockResponse::text(200, "pending"),
        );

        let response = client
            .get("http://api/leaves/pending?x=1", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.text(), "pending");
    }

    #[tokio::test]
    async fn test_default_and_missing() {
        let client = MockHttpClient::new();
        assert!(matches!(
            client.get("http://api/x", &Headers::new()).await,
            Err(HttpError::Other(_))
        ));

        client.set_default_response(MockResponse::empty(404));
        let response = client.get("http://api/x", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_body_recorded_as_json() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::empty(201));
        client
            .post("http://api/departments", r#"{"departmentName":"Ops"}"#, &Headers::new())
            .await
            .unwrap();
        let body = client.get_requests()[0].json().unwrap();
        assert_eq!(body["departmentName"], "Ops");
    }
}
