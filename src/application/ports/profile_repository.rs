use async_trait::async_trait;

use crate::domain::{Profile, UserId};

use super::RepositoryError;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self, user_id: UserId) -> Result<Option<Profile>, RepositoryError>;

    async fn upsert(&self, profile: &Profile) -> Result<(), RepositoryError>;
}
