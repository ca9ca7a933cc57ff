use slackvenn_models::{
    id::UserId,
    users::{User, UserInfo},
};

use super::impl_prelude::*;

impl Http {
    /// Gets an user from the api
    pub async fn fetch_user(&self, user_id: &UserId) -> Result<User> {
        let info: UserInfo = self.call("users.info", &[("user", user_id.as_ref())]).await?;

        Ok(info.user)
    }
}
