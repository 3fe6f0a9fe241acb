use async_trait::async_trait;

use crate::domain::AuthenticatedUser;

/// Resolves bearer tokens against the external auth service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` means the token is not (or no longer) valid.
    async fn authenticate(&self, token: &str) -> Result<Option<AuthenticatedUser>, IdentityError>;
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider unreachable: {0}")]
    Unreachable(String),
    #[error("invalid identity response: {0}")]
    InvalidResponse(String),
}
