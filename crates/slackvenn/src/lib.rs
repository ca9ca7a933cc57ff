pub extern crate slackvenn_http;
pub extern crate slackvenn_models;

use std::{fmt, io::Write};

use slackvenn_http::{Http, HttpError, Result as HttpResult};
use slackvenn_models::{
    conversations::ConversationMembers,
    id::{ChannelId, UserId},
};

pub mod collector;
pub mod config;
pub mod report;
pub mod resolver;
pub mod venn;

#[cfg(test)]
mod test_utils;

pub use config::{Cli, Config, ConfigError};
pub use resolver::{NameTable, UNKNOWN_NAME};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] HttpError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error("Error getting members of channel {side} ({channel}): {source}")]
    Members {
        side: Side,
        channel: ChannelId,
        #[source]
        source: HttpError,
    },
    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

/// Which of the two compared channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// The two api calls a comparison needs.
#[async_trait::async_trait]
pub trait MembersApi: Send + Sync {
    /// One page of the members of `channel`, starting at `cursor`.
    async fn conversation_members(
        &self,
        channel: &ChannelId,
        cursor: Option<&str>,
        limit: u32,
    ) -> HttpResult<ConversationMembers>;

    /// The display name of `user`.
    async fn user_name(&self, user: &UserId) -> HttpResult<String>;
}

#[async_trait::async_trait]
impl MembersApi for Http {
    async fn conversation_members(
        &self,
        channel: &ChannelId,
        cursor: Option<&str>,
        limit: u32,
    ) -> HttpResult<ConversationMembers> {
        self.fetch_conversation_members(channel, cursor, limit).await
    }

    async fn user_name(&self, user: &UserId) -> HttpResult<String> {
        Ok(self.fetch_user(user).await?.name)
    }
}

/// Outcome of comparing the members of two channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub channel_a: ChannelId,
    pub channel_b: ChannelId,
    pub members_a: Vec<UserId>,
    pub members_b: Vec<UserId>,
    /// Members of both channels, in channel A's order.
    pub both: Vec<UserId>,
    pub only_a: Vec<UserId>,
    pub only_b: Vec<UserId>,
    pub names: NameTable,
}

impl Comparison {
    pub fn new(
        channel_a: ChannelId,
        channel_b: ChannelId,
        members_a: Vec<UserId>,
        members_b: Vec<UserId>,
        names: NameTable,
    ) -> Self {
        let both = venn::intersection(&members_a, &members_b);
        let only_a = venn::difference(&members_a, &members_b);
        let only_b = venn::difference(&members_b, &members_a);

        Self {
            channel_a,
            channel_b,
            members_a,
            members_b,
            both,
            only_a,
            only_b,
            names,
        }
    }
}

/// Fetches both member lists, resolves every member's name, and compares
/// the lists.
///
/// Fails on the first page that can't be fetched. Names that can't be
/// resolved don't fail the comparison.
pub async fn run<A: MembersApi + ?Sized>(api: &A, config: &Config) -> Result<Comparison> {
    let members_a = collector::fetch_all_members(api, &config.channel_a, config.page_limit)
        .await
        .map_err(|source| Error::Members {
            side: Side::A,
            channel: config.channel_a.clone(),
            source,
        })?;

    let members_b = collector::fetch_all_members(api, &config.channel_b, config.page_limit)
        .await
        .map_err(|source| Error::Members {
            side: Side::B,
            channel: config.channel_b.clone(),
            source,
        })?;

    let names = resolver::resolve_names(api, members_a.iter().chain(&members_b).cloned()).await;

    Ok(Comparison::new(
        config.channel_a.clone(),
        config.channel_b.clone(),
        members_a,
        members_b,
        names,
    ))
}

/// Compares the two channels named on the command line and writes the
/// header and the report to `out`.
///
/// The token is checked and `connect` builds the client before anything is
/// written. A failed fetch leaves only the header in `out`.
pub async fn compare<A, F, W>(cli: Cli, token: Option<String>, connect: F, out: &mut W) -> Result
where
    A: MembersApi,
    F: FnOnce(&Config) -> HttpResult<A>,
    W: Write,
{
    let config = Config::from_cli(cli, token)?;
    tracing::debug!(?config, "starting");

    let api = connect(&config)?;

    report::write_header(out, &config.channel_a, &config.channel_b)?;

    let comparison = run(&api, &config).await?;

    report::write_report(out, &comparison)?;

    Ok(())
}
