use std::{result::Result as StdResult, time::Duration};

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use serde::{de::DeserializeOwned, Deserialize};
use slackvenn_models::response::ResponseStatus;

pub mod conversations;
pub mod users_information;

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("decoding: {0}")]
    Decoding(#[from] serde_json::Error),

    #[error("token is not a valid header value")]
    InvalidToken(#[from] InvalidHeaderValue),

    /// The api answered with `"ok": false`.
    #[error("{method}: {error}")]
    Api { method: &'static str, error: String },
}

pub type Result<T = ()> = StdResult<T, HttpError>;

/// Root of the public Web API.
pub const DEFAULT_API_ROOT: &str = "https://slack.com/api";

/// Authentication for the Web API.
pub enum HttpAuthentication<'a> {
    /// An `xoxb-` bot token or `xoxp-` user token, sent as `Authorization: Bearer`.
    Bearer { token: &'a str },
}

impl<'a> HttpAuthentication<'a> {
    fn header_value(&self) -> Result<HeaderValue> {
        match self {
            HttpAuthentication::Bearer { token } => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
                value.set_sensitive(true);
                Ok(value)
            }
        }
    }
}

/// A value that can be used to send requests to the Web API.
pub struct Http {
    client: reqwest::Client,
    api_root: String,
}

macro_rules! ep {
    ($self:ident, $ep:literal $($args:tt)*) => {
        format!(concat!("{}", $ep), $self.api_root, $($args)*)
    };
}

impl Http {
    /// Creates a new client talking to [`DEFAULT_API_ROOT`].
    pub fn new<'auth>(auth: impl Into<HttpAuthentication<'auth>>) -> Result<Self> {
        Self::new_with_url(auth, DEFAULT_API_ROOT, None)
    }

    /// Creates a new client talking to a custom api root, like a mock or a proxy.
    ///
    /// `timeout` applies to every request; [`None`] waits forever.
    pub fn new_with_url<'auth>(
        auth: impl Into<HttpAuthentication<'auth>>,
        api_root: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, auth.into().header_value()?);

        let mut builder = reqwest::Client::builder().default_headers(default_headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_root: api_root.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Calls a read method and unwraps the `ok` envelope around its payload.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let v = self
            .client
            .get(ep!(self, "/{}" method))
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let status = ResponseStatus::deserialize(&v)?;
        if !status.ok {
            return Err(HttpError::Api {
                method,
                error: status.error.unwrap_or_else(|| "unknown_error".to_string()),
            });
        }
        if let Some(warning) = &status.warning {
            tracing::debug!(method, %warning, "api warning");
        }

        Ok(serde_json::from_value(v)?)
    }
}

impl<'a> From<&'a str> for HttpAuthentication<'a> {
    fn from(token: &'a str) -> Self {
        Self::Bearer { token }
    }
}

impl<'a> From<&'a String> for HttpAuthentication<'a> {
    fn from(token: &'a String) -> Self {
        Self::Bearer {
            token: token.as_str(),
        }
    }
}

mod impl_prelude {
    pub use super::{Http, Result};
}
