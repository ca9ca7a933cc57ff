use slackvenn_http::Result as HttpResult;
use slackvenn_models::id::{ChannelId, UserId};
use tracing::{debug, info};

use crate::MembersApi;

/// Fetches every member of a channel, following cursors until the api
/// stops handing them out.
///
/// The first failing page fails the whole call; members from earlier
/// pages are dropped.
pub async fn fetch_all_members<A: MembersApi + ?Sized>(
    api: &A,
    channel: &ChannelId,
    page_limit: u32,
) -> HttpResult<Vec<UserId>> {
    let mut members = Vec::new();
    let mut cursor: Option<String> = None;
    let mut page_number = 1usize;

    loop {
        let page = api
            .conversation_members(channel, cursor.as_deref(), page_limit)
            .await?;
        debug!(%channel, page = page_number, size = page.members.len(), "fetched members page");

        let next_cursor = page.next_cursor().map(str::to_string);
        members.extend(page.members);

        match next_cursor {
            Some(next_cursor) => {
                cursor = Some(next_cursor);
                page_number += 1;
            }
            None => break,
        }
    }

    info!(%channel, count = members.len(), "fetched all members");

    Ok(members)
}
