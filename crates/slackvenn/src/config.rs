use std::{ffi::OsString, fmt, time::Duration};

use clap::Parser;
use slackvenn_http::{Http, Result as HttpResult, DEFAULT_API_ROOT};
use slackvenn_models::id::ChannelId;

/// Environment variable holding the api token.
pub const TOKEN_VAR: &str = "SLACK_TOKEN";

/// Largest page `conversations.members` hands out.
pub const MAX_PAGE_LIMIT: u32 = 1000;

/// slackVenn - Slack channel membership analyzer
///
/// Creates Venn diagrams of user overlaps between channels.
/// The api token is read from the SLACK_TOKEN environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "slackvenn", version)]
pub struct Cli {
    /// Id of the first channel, e.g. C1234567890
    pub channel_a: ChannelId,

    /// Id of the second channel
    pub channel_b: ChannelId,

    /// Root url of the Web API
    #[arg(long, env = "SLACK_API_URL", default_value = DEFAULT_API_ROOT)]
    pub api_url: String,

    /// Number of members to request per page
    #[arg(long, default_value_t = MAX_PAGE_LIMIT)]
    pub page_limit: u32,

    /// Per-request timeout in seconds; waits forever when unset
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Parses `args`, reporting a missing token ahead of any usage error.
    ///
    /// `--help` and `--version` are still answered without a token.
    pub fn try_parse_with_token<I, T>(args: I, token: Option<&str>) -> crate::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if e.use_stderr() && token.map_or(true, str::is_empty) => {
                Err(ConfigError::MissingToken.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} env var is required", var = TOKEN_VAR)]
    MissingToken,
    #[error("page limit must be between 1 and {max}, got {0}", max = MAX_PAGE_LIMIT)]
    InvalidPageLimit(u32),
}

/// Everything one comparison needs.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub channel_a: ChannelId,
    pub channel_b: ChannelId,
    pub api_url: String,
    pub page_limit: u32,
    pub timeout: Option<Duration>,
}

impl Config {
    /// A config with the default api root, page limit and no timeout.
    pub fn new(token: impl Into<String>, channel_a: ChannelId, channel_b: ChannelId) -> Self {
        Self {
            token: token.into(),
            channel_a,
            channel_b,
            api_url: DEFAULT_API_ROOT.to_string(),
            page_limit: MAX_PAGE_LIMIT,
            timeout: None,
        }
    }

    /// Builds the config from the command line and the token, if one was found.
    pub fn from_cli(cli: Cli, token: Option<String>) -> Result<Self, ConfigError> {
        let token = token
            .filter(|it| !it.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        if cli.page_limit == 0 || cli.page_limit > MAX_PAGE_LIMIT {
            return Err(ConfigError::InvalidPageLimit(cli.page_limit));
        }

        Ok(Self {
            token,
            channel_a: cli.channel_a,
            channel_b: cli.channel_b,
            api_url: cli.api_url,
            page_limit: cli.page_limit,
            timeout: cli.timeout_secs.map(Duration::from_secs),
        })
    }

    /// A client for the configured api.
    pub fn http(&self) -> HttpResult<Http> {
        Http::new_with_url(&self.token, &self.api_url, self.timeout)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("channel_a", &self.channel_a)
            .field("channel_b", &self.channel_b)
            .field("api_url", &self.api_url)
            .field("page_limit", &self.page_limit)
            .field("timeout", &self.timeout)
            .finish()
    }
}
