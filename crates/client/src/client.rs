// HTTP client wrapper for the Data Agent API

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// Shared transport used by every service
///
/// Maps 404 to [`ClientError::NotFound`] and any other non-success status to
/// [`ClientError::Api`] with the response body as message. Callers decide
/// which of those are benign.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.normalized_base_url().to_string(),
            http,
        })
    }

    /// Client with default settings against `base_url`
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(&ClientConfig::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::GET, path);
        self.send_json(request).await
    }

    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let request = self.request(Method::GET, path).query(query);
        self.send_json(request).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.request(Method::POST, path).json(body);
        self.send_json(request).await
    }

    /// POST without a body, parameters in the query string
    pub async fn post_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let request = self.request(Method::POST, path).query(query);
        self.send_json(request).await
    }

    /// POST without body or query
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::POST, path);
        self.send_json(request).await
    }

    /// POST and report only the status; the body is not read
    pub async fn post_for_status<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<StatusCode> {
        let request = self.request(Method::POST, path).json(body);
        let response = self.send(request).await?;
        Ok(response.status())
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.request(Method::PUT, path).json(body);
        self.send_json(request).await
    }

    /// PUT without a body, parameters in the query string
    pub async fn put_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let request = self.request(Method::PUT, path).query(query);
        self.send_json(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::DELETE, path);
        self.send_json(request).await
    }

    /// DELETE ignoring whatever body the backend returns
    pub async fn delete_unit(&self, path: &str) -> Result<()> {
        let request = self.request(Method::DELETE, path);
        self.send(request).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, path = %path, "Sending API request");
        self.http.request(method, url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), message = %message, "API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let body = response.json().await?;
        Ok(body)
    }
}

/// Percent-encode a caller-supplied value for use as one path segment
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trimmed() {
        let client = HttpClient::with_base_url("http://localhost:8065/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8065");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("t_order"), "t_order");
        assert_eq!(segment("my table/x"), "my%20table%2Fx");
    }
}
