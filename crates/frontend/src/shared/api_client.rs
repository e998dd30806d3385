//! HTTP client for the catalog REST API.
//!
//! Every call goes through [`ApiClient`], which owns the base URL, the request
//! timeout and the [`Session`] whose bearer token is attached to outgoing
//! requests. Responses are unwrapped from the `{success, data, message}`
//! envelope; a `401` ends the session.

use contracts::shared::api::{ApiResponse, ListQuery, Page};
use gloo_net::http::{Method, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::AbortController;

use crate::config::AppConfig;
use crate::system::auth::context::Session;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Your session has expired, please sign in again")]
    Unauthenticated,
    #[error("The requested record does not exist")]
    NotFound,
    #[error("Network error: {0}")]
    Network(String),
    #[error("The server did not answer in time")]
    Timeout,
    #[error("{message} (HTTP {status})")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    timeout_ms: u32,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self {
            base: config.api_base(),
            timeout_ms: config.request_timeout_ms,
            session,
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// GET a single payload.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.send(Method::GET, self.url(path), None).await?;
        decode_data(&text)
    }

    /// GET one page of a collection. The pagination block is kept when the
    /// endpoint sends one.
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<Page<T>, ApiError> {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
        let url = if qs.is_empty() {
            self.url(path)
        } else {
            format!("{}?{}", self.url(path), qs)
        };
        let text = self.send(Method::GET, url, None).await?;
        let envelope = decode_envelope::<Vec<T>>(&text)?;
        let pagination = envelope.pagination;
        let items = envelope.into_data().map_err(ApiError::Rejected)?;
        Ok(Page { items, pagination })
    }

    /// POST a body and decode the returned payload.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = encode(body)?;
        let text = self.send(Method::POST, self.url(path), Some(body)).await?;
        decode_data(&text)
    }

    /// POST without a body, only checking the envelope.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let text = self.send(Method::POST, self.url(path), None).await?;
        check_success(&text)
    }

    /// Send a create/update body with `method`, only checking the envelope.
    pub async fn write<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let body = encode(body)?;
        let text = self.send(method, self.url(path), Some(body)).await?;
        check_success(&text)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let text = self.send(Method::DELETE, self.url(path), None).await?;
        check_success(&text)
    }

    async fn send(&self, method: Method, url: String, body: Option<String>) -> Result<String, ApiError> {
        let controller = AbortController::new()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        let signal = controller.signal();

        let mut builder = RequestBuilder::new(&url)
            .method(method.clone())
            .header("Accept", "application/json")
            .abort_signal(Some(&signal));
        if let Some(token) = self.session.token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        // dropping the timer when the request settles cancels the abort
        let timer = Timeout::new(self.timeout_ms, move || controller.abort());
        let result = request.send().await;
        drop(timer);

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                let err = if signal.aborted() {
                    ApiError::Timeout
                } else {
                    ApiError::Network(e.to_string())
                };
                log::error!("{} {} failed: {}", method, url, err);
                return Err(err);
            }
        };

        self.check_status(&method, &url, response).await
    }

    async fn check_status(
        &self,
        method: &Method,
        url: &str,
        response: Response,
    ) -> Result<String, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if response_ok(status) {
            return Ok(text);
        }

        let err = status_error(status, &text);
        if err == ApiError::Unauthenticated {
            log::warn!("{} {} rejected the session token", method, url);
            self.session.sign_out();
        } else {
            log::error!("{} {} failed: {}", method, url, err);
        }
        Err(err)
    }
}

/// Hook to access the API client
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided")
}

fn response_ok(status: u16) -> bool {
    (200..300).contains(&status)
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode_envelope<T: DeserializeOwned>(text: &str) -> Result<ApiResponse<T>, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_data<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    decode_envelope::<T>(text)?
        .into_data()
        .map_err(ApiError::Rejected)
}

fn check_success(text: &str) -> Result<(), ApiError> {
    // some endpoints answer 204 or a bare body
    if text.trim().is_empty() {
        return Ok(());
    }
    let envelope = decode_envelope::<serde_json::Value>(text)?;
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::Rejected(
            envelope
                .message
                .unwrap_or_else(|| "Request was rejected".to_string()),
        ))
    }
}

/// Map a non-2xx status to an error, keeping the server's message if any.
fn status_error(status: u16, text: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthenticated,
        404 => ApiError::NotFound,
        _ => {
            let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(text)
                .ok()
                .and_then(|e| e.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Request failed".to_string());
            ApiError::Http { status, message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mapping() {
        assert_eq!(status_error(401, ""), ApiError::Unauthenticated);
        assert_eq!(status_error(404, "<html>"), ApiError::NotFound);
        assert_eq!(
            status_error(409, r#"{"success":false,"message":"Slug already exists"}"#),
            ApiError::Http {
                status: 409,
                message: "Slug already exists".to_string()
            }
        );
        assert_eq!(
            status_error(500, "oops"),
            ApiError::Http {
                status: 500,
                message: "Request failed".to_string()
            }
        );
    }

    #[test]
    fn test_success_false_is_failure_on_2xx() {
        let err = check_success(r#"{"success":false,"message":"Duplicate"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Duplicate".to_string()));
        assert!(check_success(r#"{"success":true}"#).is_ok());
        assert!(check_success("").is_ok());
        assert!(matches!(check_success("not json"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_data() {
        let value: u32 = decode_data(r#"{"success":true,"data":7}"#).unwrap();
        assert_eq!(value, 7);
        assert!(matches!(
            decode_data::<u32>(r#"{"success":true,"data":"x"}"#),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_list_query_string() {
        let mut query = ListQuery {
            page: Some(2),
            limit: Some(20),
            search: Some("matrix".to_string()),
            ..Default::default()
        };
        query.filters.insert("role".to_string(), "admin".to_string());
        let qs = serde_qs::to_string(&query).unwrap();
        assert!(qs.contains("page=2"));
        assert!(qs.contains("limit=20"));
        assert!(qs.contains("search=matrix"));
        assert!(qs.contains("role=admin"));
    }
}
