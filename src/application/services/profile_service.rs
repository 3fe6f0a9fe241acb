use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::ProfileRepository;
use crate::domain::{AuthenticatedUser, Profile, Theme};

use super::ServiceError;

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub theme: Option<String>,
}

/// Loads a user's preferences at start-up and saves them whenever they change.
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn load(&self, user: &AuthenticatedUser) -> Result<Profile, ServiceError> {
        let stored = self.repository.get(user.id).await?;
        Ok(stored.unwrap_or_else(|| Profile::with_defaults(user.id, user.email.as_deref())))
    }

    #[tracing::instrument(skip(self, user, update), fields(user_id = %user.id))]
    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        update: ProfileUpdate,
    ) -> Result<Profile, ServiceError> {
        let mut profile = self.load(user).await?;

        if let Some(theme) = update.theme {
            profile.theme = theme.parse::<Theme>().map_err(ServiceError::Validation)?;
        }
        if let Some(name) = update.display_name {
            let name = name.trim();
            profile.display_name = (!name.is_empty()).then(|| name.to_string());
        }
        profile.updated_at = Utc::now();

        self.repository.upsert(&profile).await?;
        tracing::info!(theme = %profile.theme, "Profile saved");
        Ok(profile)
    }
}
