//! HTTP client for the account API's authentication endpoint. The secret is
//! only exposed while the request body is serialized and is never logged.

use crate::{
    APP_USER_AGENT,
    auth::{error::TransportError, form::Credentials, session::AuthPayload},
};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;
use std::{future::Future, time::Duration};
use tracing::{debug, instrument};
use url::Url;

pub const AUTHENTICATE_PATH: &str = "/api/account/authenticate";
/// Default request timeout applied by [`HttpAuthenticator`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

/// Reply envelope: `ok` is the transport-level outcome, `data` the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub ok: bool,
    pub data: Option<AuthPayload>,
}

/// Sends credentials to whatever decides whether they are valid.
pub trait Authenticator {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResponse, TransportError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    #[must_use]
    pub const fn new(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpAuthenticator {
    client: Client,
    endpoint: Url,
}

impl HttpAuthenticator {
    /// # Errors
    /// Returns an error if the endpoint URL cannot be built or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let endpoint = endpoint_url(&config.api_base_url, AUTHENTICATE_PATH)?;

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Config(e.to_string()))?;

        debug!("authentication endpoint: {}", endpoint);

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Authenticator for HttpAuthenticator {
    #[instrument(skip(self, credentials), fields(url = %self.endpoint))]
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse, TransportError> {
        let request = AuthRequest {
            email: &credentials.identifier,
            password: credentials.secret.expose_secret(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), "authentication response received");

        parse_envelope(status.is_success(), &body)
    }
}

/// Joins `path` onto `base`, keeping any path prefix `base` already has.
///
/// # Errors
/// Returns an error if the joined string is not a valid URL.
pub fn endpoint_url(base: &Url, path: &str) -> Result<Url, TransportError> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim().trim_start_matches('/')
    );

    Url::parse(&joined).map_err(|e| TransportError::Config(format!("{joined}: {e}")))
}

fn parse_envelope(ok: bool, body: &str) -> Result<AuthResponse, TransportError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(AuthResponse { ok, data: None });
    }

    let data = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Null) => None,
        Ok(Value::Object(fields)) => Some(AuthPayload::from(fields)),
        Ok(Value::String(message)) if !ok => Some(AuthPayload::with_message(sanitize_body(
            &message,
        ))),
        Ok(_) | Err(_) if !ok => Some(AuthPayload::with_message(sanitize_body(trimmed))),
        Ok(_) => {
            return Err(TransportError::Parse(
                "expected a JSON object in the response body".to_string(),
            ));
        }
        Err(e) => return Err(TransportError::Parse(e.to_string())),
    };

    Ok(AuthResponse { ok, data })
}

/// Trims and truncates an error body for user-facing messages.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
