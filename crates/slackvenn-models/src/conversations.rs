use serde::{Deserialize, Serialize};

use crate::{id::UserId, response::ResponseMetadata};

// https://api.slack.com/methods/conversations.members

/// One page of `conversations.members`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ConversationMembers {
    pub members: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_metadata: Option<ResponseMetadata>,
}

impl ConversationMembers {
    /// The cursor to request the next page with, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .map(|it| it.next_cursor.as_str())
            .filter(|it| !it.is_empty())
    }
}
