pub mod conversations;
pub mod id;
pub mod response;
pub mod users;
