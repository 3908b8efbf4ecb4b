use crate::session::Session;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, error};

/// Failures surfaced by the REST client. Everything user-facing is derived
/// from these three shapes: transport problems, non-2xx responses, and
/// payloads that do not decode.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("invalid response payload: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("invalid api base url `{0}`")]
    BaseUrl(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Thin JSON client over the backend REST surface. All requests carry a JSON
/// content type; authenticated calls attach the session's bearer token.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        url::Url::parse(base_url).map_err(|_| ApiError::BaseUrl(base_url.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        session: Option<&Session>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.endpoint(path);
        debug!(%method, %url, "api request");

        let mut request = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }
        if let Some(token) = session.and_then(|s| s.token()) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %url, "api request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(ApiError::Decode)
    }

    fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body).map_err(ApiError::Encode)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&Session>,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, None, session).await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        session: Option<&Session>,
    ) -> Result<T, ApiError> {
        let body = Self::encode(body)?;
        let response = self.send(Method::POST, path, Some(body), session).await?;
        Self::decode(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        session: Option<&Session>,
    ) -> Result<T, ApiError> {
        let body = Self::encode(body)?;
        let response = self.send(Method::PUT, path, Some(body), session).await?;
        Self::decode(response).await
    }

    /// PUT whose response body the caller does not care about.
    pub async fn put_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        session: Option<&Session>,
    ) -> Result<(), ApiError> {
        let body = Self::encode(body)?;
        self.send(Method::PUT, path, Some(body), session).await?;
        Ok(())
    }

    /// PUT with no request body, e.g. `/orders/{id}/approve`.
    pub async fn put_empty(&self, path: &str, session: Option<&Session>) -> Result<(), ApiError> {
        self.send(Method::PUT, path, None, session).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str, session: Option<&Session>) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, None, session).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_its_trailing_slash() {
        let api = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(api.endpoint("/products"), "http://localhost:8080/api/products");
    }

    #[test]
    fn endpoint_is_plain_concatenation() {
        let api = ApiClient::new("http://localhost:8080/api").unwrap();
        assert_eq!(
            api.endpoint("/orders/7/approve"),
            "http://localhost:8080/api/orders/7/approve"
        );
    }

    #[test]
    fn garbage_base_url_is_rejected() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::BaseUrl(_))
        ));
    }

    #[test]
    fn status_accessor_only_reports_http_rejections() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(ApiError::BaseUrl("x".to_string()).status(), None);
    }
}
