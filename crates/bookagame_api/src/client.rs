// --- File: crates/bookagame_api/src/client.rs ---
use bookagame_common::http::error_message_from_body;
use bookagame_common::services::TokenStore;
use bookagame_common::{create_client, BookingError, GENERIC_ERROR_MESSAGE};
use bookagame_config::ApiConfig;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::envelope::{DataEnvelope, RefreshRequest, RefreshResponse};
use bookagame_common::models::SessionTokens;

/// One call against the API, replayable for the refresh retry.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Option<serde_json::Value>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: None,
            body: None,
        }
    }

    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn put(segments: &[&str]) -> Self {
        Self::new(Method::PUT, segments)
    }

    pub fn delete(segments: &[&str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    /// Adds query parameters from a serializable struct; `None` fields are
    /// expected to be skipped by the struct's serde attributes.
    pub fn query<Q: Serialize>(mut self, query: &Q) -> Result<Self, BookingError> {
        let value = serde_json::to_value(query)?;
        if value.as_object().is_some_and(|map| !map.is_empty()) {
            self.query = Some(value);
        }
        Ok(self)
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, BookingError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path())
    }
}

/// HTTP client for the Book a Game API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Creates a client for the configured base URL and timeout.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, BookingError> {
        let http = create_client(config.timeout_secs)
            .map_err(|e| BookingError::Config(format!("failed to build HTTP client: {}", e)))?;
        Self::with_http_client(http, &config.resolved_base_url(), tokens)
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_http_client(
        http: Client,
        base_url: &str,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, BookingError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| BookingError::Config(format!("invalid API base URL {:?}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BookingError::Config(format!(
                "API base URL {} cannot carry a path",
                base_url
            )));
        }
        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn url(&self, segments: &[String]) -> Result<Url, BookingError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BookingError::Config(format!("API base URL {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request with the stored bearer token.
    ///
    /// A 401 triggers one session refresh; on success the request is sent
    /// again exactly once. Non-success statuses become errors.
    pub async fn send(&self, request: &ApiRequest) -> Result<Response, BookingError> {
        let url = self.url(&request.segments)?;
        let mut retried = false;

        loop {
            let mut builder = self.http.request(request.method.clone(), url.clone());
            if let Some(query) = &request.query {
                builder = builder.query(query);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }
            if let Some(token) = self.tokens.access_token().await? {
                builder = builder.bearer_auth(token);
            }

            debug!(request = %request, retried, "sending API request");
            let response = builder.send().await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED && !retried {
                retried = true;
                if self.refresh_after_unauthorized().await {
                    debug!(request = %request, "retrying after session refresh");
                    continue;
                }
            }

            if status.is_success() {
                return Ok(response);
            }
            return Err(error_from_response(response).await);
        }
    }

    /// Sends a request and decodes the whole body as `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, BookingError> {
        let response = self.send(request).await?;
        decode_body(request, response).await
    }

    /// Sends a request and decodes the `data` member of the standard envelope.
    pub async fn fetch_data<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, BookingError> {
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let envelope: DataEnvelope<T> = decode_body(request, response).await?;
        envelope.into_data(status, request)
    }

    /// Sends a request whose response body carries nothing the client needs.
    pub async fn execute(&self, request: &ApiRequest) -> Result<(), BookingError> {
        self.send(request).await.map(|_| ())
    }

    /// Exchanges a refresh token for a new session.
    ///
    /// Sent without a bearer token and never retried. `Ok(None)` means the
    /// API answered but declined (`success: false`).
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Option<SessionTokens>, BookingError> {
        let request = ApiRequest::post(&["auth", "refresh"]).json(&RefreshRequest {
            refresh_token: refresh_token.to_string(),
        })?;
        let url = self.url(&request.segments)?;
        let mut builder = self.http.post(url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        let refreshed: RefreshResponse = decode_body(&request, response).await?;
        Ok(refreshed.into_tokens())
    }

    async fn refresh_after_unauthorized(&self) -> bool {
        let refresh_token = match self.tokens.refresh_token().await {
            Ok(Some(token)) => token,
            Ok(None) => return false,
            Err(e) => {
                warn!("could not read refresh token: {}", e);
                return false;
            }
        };

        match self.refresh_session(&refresh_token).await {
            Ok(Some(tokens)) => match self.tokens.set_tokens(tokens).await {
                Ok(()) => {
                    info!("session refreshed");
                    true
                }
                Err(e) => {
                    warn!("refreshed session could not be stored: {}", e);
                    false
                }
            },
            Ok(None) => {
                debug!("refresh declined by the API");
                false
            }
            Err(e) => {
                warn!("session refresh failed, clearing tokens: {}", e);
                if let Err(clear_err) = self.tokens.clear_tokens().await {
                    warn!("failed to clear tokens: {}", clear_err);
                }
                false
            }
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

async fn decode_body<T: DeserializeOwned>(request: &ApiRequest, response: Response) -> Result<T, BookingError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        BookingError::Parse(format!("unexpected response to {}: {}", request, e))
    })
}

/// Turns a non-success response into the matching error variant.
pub(crate) async fn error_from_response(response: Response) -> BookingError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message_from_body(&body)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

    if status == StatusCode::UNAUTHORIZED {
        BookingError::Unauthorized { message }
    } else {
        BookingError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
