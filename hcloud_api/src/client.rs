//! HTTP client for the Hetzner Cloud API.

use std::sync::Arc;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    config::{ClientConfig, TokenSupplier},
    query::Query,
    response::ApiResponse,
    types::ErrorResponse,
    Error,
};

/// HTTP client for the Hetzner Cloud API.
///
/// Holds one `reqwest::Client` for connection reuse. The bearer token is
/// requested from the [`TokenSupplier`] on every call. Endpoint methods live
/// in the `endpoints` module, grouped by resource.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    token: Arc<dyn TokenSupplier>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the production API, honouring `HCLOUD_*` environment overrides.
    pub fn new(token: impl TokenSupplier + 'static) -> Result<Self, Error> {
        Self::from_config(ClientConfig::from_env(), token)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: impl TokenSupplier + 'static) -> Result<Self, Error> {
        Self::from_config(ClientConfig::default().with_endpoint(base_url), token)
    }

    pub fn from_config(
        config: ClientConfig,
        token: impl TokenSupplier + 'static,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            http,
            config,
            token: Arc::new(token),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.config.endpoint, path).as_str()).map_err(
            |e| {
                tracing::error!("Invalid URL constructed from {}{}: {}", self.config.endpoint, path, e);
                Error::InvalidUrl(e)
            },
        )?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    pub(crate) async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        self.send::<T, ()>(Method::GET, url, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path, None::<&crate::query::ListQuery>)?;
        self.send(Method::POST, url, body).await
    }

    pub(crate) async fn delete<T>(&self, path: &str) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, None::<&crate::query::ListQuery>)?;
        self.send::<T, ()>(Method::DELETE, url, None).await
    }

    async fn send<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!("{} {}", method, url);
        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .bearer_auth(self.token.token())
            .header("accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, url.path(), e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&text);
            tracing::warn!(
                "{} {} returned status {}: {}",
                method,
                url.path(),
                status,
                snippet
            );
            let error = serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .map(|e| e.error);
            return Ok(ApiResponse {
                status: status.as_u16(),
                body: None,
                error,
            });
        }

        if text.trim().is_empty() {
            return Ok(ApiResponse {
                status: status.as_u16(),
                body: None,
                error: None,
            });
        }

        // A literal `null` body decodes to `None`, same as an empty body.
        let parsed = serde_json::from_str::<Option<T>>(&text).map_err(|e| {
            let snippet = truncate_body(&text);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Deserialize {
                status: status.as_u16(),
                message: e.to_string(),
            }
        })?;

        Ok(ApiResponse {
            status: status.as_u16(),
            body: parsed,
            error: None,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ListQuery, Query};

    #[test]
    fn truncate_body_limits_length() {
        assert_eq!(truncate_body("short"), "short");

        let long = "ä".repeat(2500);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.chars().count(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn get_url_joins_endpoint_path_and_query() {
        let client = Client::with_base_url("http://localhost:1234/", "token").unwrap();
        let url = client
            .get_url("/v1/networks", Some(&ListQuery::default().with_label_selector("a=b")))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/v1/networks?label_selector=a%3Db");

        let url = client.get_url("/v1/networks/10", None::<&ListQuery>).unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/v1/networks/10");
    }

    #[test]
    fn get_url_rejects_invalid_endpoint() {
        let client = Client::with_base_url("not a url", "token").unwrap();
        let result = client.get_url("/v1/servers", None::<&ListQuery>);
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn debug_output_hides_token() {
        let client = Client::with_base_url("http://localhost", "secret-token").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("http://localhost"));
        assert!(!debug.contains("secret-token"));
    }
}
