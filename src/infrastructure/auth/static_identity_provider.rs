use std::collections::HashMap;

use async_trait::async_trait;

use crate::application::ports::{IdentityError, IdentityProvider};
use crate::domain::{AuthenticatedUser, UserId};

/// Fixed token table for scaffold mode and tests.
#[derive(Default)]
pub struct StaticIdentityProvider {
    users: HashMap<String, AuthenticatedUser>,
}

impl StaticIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.users.insert(token.into(), user);
        self
    }

    /// One user, reachable with `token`, with a fresh id.
    pub fn single(token: impl Into<String>, email: &str) -> Self {
        Self::new().with_user(
            token,
            AuthenticatedUser {
                id: UserId::new(),
                email: Some(email.to_string()),
            },
        )
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn authenticate(&self, token: &str) -> Result<Option<AuthenticatedUser>, IdentityError> {
        Ok(self.users.get(token).cloned())
    }
}
