use std::{collections::HashMap, sync::Mutex};

use slackvenn_http::{HttpError, Result as HttpResult};
use slackvenn_models::{
    conversations::ConversationMembers,
    id::{ChannelId, UserId},
    response::ResponseMetadata,
};

use crate::MembersApi;

pub fn channel(id: &str) -> ChannelId {
    id.parse().unwrap()
}

pub fn user(id: &str) -> UserId {
    id.parse().unwrap()
}

/// In-memory workspace. The cursor of page `n` of channel `C` is `C-n`.
#[derive(Default)]
pub struct FakeApi {
    pages: HashMap<ChannelId, Vec<ConversationMembers>>,
    failing_pages: HashMap<ChannelId, usize>,
    users: HashMap<UserId, String>,
    member_requests: Mutex<Vec<(ChannelId, Option<String>, u32)>>,
    user_requests: Mutex<Vec<UserId>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel whose members come in one page with no `response_metadata`.
    pub fn with_members(mut self, id: &str, members: &[&str]) -> Self {
        let page = ConversationMembers {
            members: members.iter().map(|it| user(it)).collect(),
            response_metadata: None,
        };
        self.pages.insert(channel(id), vec![page]);
        self
    }

    pub fn with_pages(mut self, id: &str, pages: &[&[&str]]) -> Self {
        let pages = pages
            .iter()
            .enumerate()
            .map(|(n, members)| ConversationMembers {
                members: members.iter().map(|it| user(it)).collect(),
                response_metadata: Some(ResponseMetadata {
                    next_cursor: if n + 1 < pages.len() {
                        format!("{}-{}", id, n + 1)
                    } else {
                        String::new()
                    },
                }),
            })
            .collect();
        self.pages.insert(channel(id), pages);
        self
    }

    /// Makes the `page`-th request (0-based) for `id` fail.
    pub fn failing_page(mut self, id: &str, page: usize) -> Self {
        self.failing_pages.insert(channel(id), page);
        self
    }

    pub fn with_user(mut self, id: &str, name: &str) -> Self {
        self.users.insert(user(id), name.to_string());
        self
    }

    pub fn member_requests(&self) -> Vec<(ChannelId, Option<String>, u32)> {
        self.member_requests.lock().unwrap().clone()
    }

    pub fn user_requests(&self) -> Vec<UserId> {
        self.user_requests.lock().unwrap().clone()
    }
}

fn api_error(method: &'static str, error: &str) -> HttpError {
    HttpError::Api {
        method,
        error: error.to_string(),
    }
}

#[async_trait::async_trait]
impl MembersApi for FakeApi {
    async fn conversation_members(
        &self,
        channel: &ChannelId,
        cursor: Option<&str>,
        limit: u32,
    ) -> HttpResult<ConversationMembers> {
        self.member_requests
            .lock()
            .unwrap()
            .push((channel.clone(), cursor.map(str::to_string), limit));

        let pages = self
            .pages
            .get(channel)
            .ok_or_else(|| api_error("conversations.members", "channel_not_found"))?;

        let index = match cursor {
            None => 0,
            Some(cursor) => cursor
                .rsplit('-')
                .next()
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| api_error("conversations.members", "invalid_cursor"))?,
        };

        if self.failing_pages.get(channel) == Some(&index) {
            return Err(api_error("conversations.members", "internal_error"));
        }

        pages
            .get(index)
            .cloned()
            .ok_or_else(|| api_error("conversations.members", "invalid_cursor"))
    }

    async fn user_name(&self, user: &UserId) -> HttpResult<String> {
        self.user_requests.lock().unwrap().push(user.clone());

        self.users
            .get(user)
            .cloned()
            .ok_or_else(|| api_error("users.info", "user_not_found"))
    }
}
