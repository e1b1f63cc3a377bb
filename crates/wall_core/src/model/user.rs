//! Wall user model.
//!
//! # Invariants
//! - Identity is `(id, login)`. Password and friend list never take part in
//!   equality or hashing.
//! - `password` is never printed through `Debug`.

use crate::model::record::UserId;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

/// Wall participant whose friends' notes make up their feed.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub login: String,
    /// Stored as given. Not hashed or otherwise protected.
    pub password: String,
    /// Read in list order by `WallService::get_friends_notes`.
    pub friend_ids: Vec<UserId>,
}

impl User {
    pub fn new(
        id: UserId,
        login: impl Into<String>,
        password: impl Into<String>,
        friend_ids: Vec<UserId>,
    ) -> Self {
        Self {
            id,
            login: login.into(),
            password: password.into(),
            friend_ids,
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.login == other.login
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.login.hash(state);
    }
}

impl Debug for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("friend_ids", &self.friend_ids)
            .finish()
    }
}
