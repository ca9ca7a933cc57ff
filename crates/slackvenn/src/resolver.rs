use std::collections::HashMap;

use slackvenn_models::id::UserId;
use tracing::{debug, warn};

use crate::MembersApi;

/// What a member is called when their name can't be looked up.
pub const UNKNOWN_NAME: &str = "unknown";

/// Display names of the members seen in one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameTable(HashMap<UserId, String>);

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The name of `user`, or [`UNKNOWN_NAME`] if it was never resolved.
    pub fn get(&self, user: &UserId) -> &str {
        self.0.get(user).map_or(UNKNOWN_NAME, String::as_str)
    }

    pub fn insert(&mut self, user: UserId, name: impl Into<String>) {
        self.0.insert(user, name.into());
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.0.contains_key(user)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Looks up the display name of every user in `users`.
///
/// Duplicates are looked up once. A failed lookup is not an error: the user
/// is recorded as [`UNKNOWN_NAME`] and the rest are still resolved.
pub async fn resolve_names<A, I>(api: &A, users: I) -> NameTable
where
    A: MembersApi + ?Sized,
    I: IntoIterator<Item = UserId>,
{
    let mut names = NameTable::new();

    for user in users {
        if names.contains(&user) {
            continue;
        }

        let name = match api.user_name(&user).await {
            Ok(name) => name,
            Err(e) => {
                warn!(%user, error = %e, "cannot resolve user name");
                UNKNOWN_NAME.to_string()
            }
        };
        names.insert(user, name);
    }

    debug!(count = names.len(), "resolved user names");

    names
}
