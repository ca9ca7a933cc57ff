use slackvenn_models::{conversations::ConversationMembers, id::ChannelId};

use super::impl_prelude::*;

impl Http {
    /// Fetches one page of the members of a conversation.
    ///
    /// Pass [`None`] as `cursor` for the first page, and the previous page's
    /// [`ConversationMembers::next_cursor`] after that.
    pub async fn fetch_conversation_members(
        &self,
        channel_id: &ChannelId,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<ConversationMembers> {
        let limit = limit.to_string();
        let mut query = vec![("channel", channel_id.as_ref()), ("limit", limit.as_str())];
        if let Some(cursor) = cursor.filter(|it| !it.is_empty()) {
            query.push(("cursor", cursor));
        }

        self.call("conversations.members", &query).await
    }
}
