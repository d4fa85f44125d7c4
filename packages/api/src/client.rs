//! # Request pipeline
//!
//! Every operation in this crate goes through [`ApiClient::request`], which
//! owns the one cross-cutting rule of the client: paths under the `/auth`
//! namespace are sent without credentials, every other path carries
//! `Authorization: Bearer <token>` when the [`SessionStore`] holds a session.
//!
//! Responses are funnelled through [`ApiClient::execute`], which turns
//! non-success statuses into [`ApiError`]s. A `401` on a resource endpoint
//! clears the stored session before the error is returned, so the next guarded
//! navigation lands on the login page.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{ClientConfig, SessionStore};

use crate::error::{ApiError, Endpoint, ErrorBody};

/// Path prefix of the endpoints that issue tokens.
pub const AUTH_NAMESPACE: &str = "/auth";

/// Whether `path` belongs to the authentication namespace.
pub fn is_auth_path(path: &str) -> bool {
    path == AUTH_NAMESPACE || path.starts_with("/auth/")
}

/// Configured HTTP client for the Smart Contact Manager API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    max_image_bytes: u64,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
            session,
            max_image_bytes: config.upload.max_image_bytes,
        }
    }

    /// The session store this client reads tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_image_bytes(&self) -> u64 {
        self.max_image_bytes
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request to `path`, attaching the bearer token where the policy
    /// allows it.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        if is_auth_path(path) {
            return builder;
        }
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and map failure statuses.
    pub(crate) async fn execute(
        &self,
        builder: RequestBuilder,
        endpoint: Endpoint,
    ) -> Result<Response, ApiError> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!("{} {}", method, path);

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", method, path, e);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let raw = response.text().await.unwrap_or_default();
        let error = ApiError::from_response(status, ErrorBody::parse(&raw), endpoint);
        tracing::warn!("{} {} -> {}: {}", method, path, status.as_u16(), error);

        if error.is_unauthorized() {
            tracing::info!("Server rejected the stored token, clearing session");
            self.session.clear();
        }
        Err(error)
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        endpoint: Endpoint,
    ) -> Result<T, ApiError> {
        let response = self.execute(builder, endpoint).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore the response body.
    pub(crate) async fn send_empty(
        &self,
        builder: RequestBuilder,
        endpoint: Endpoint,
    ) -> Result<(), ApiError> {
        self.execute(builder, endpoint).await.map(|_| ())
    }
}
