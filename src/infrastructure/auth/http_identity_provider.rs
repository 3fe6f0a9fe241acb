use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::ports::{IdentityError, IdentityProvider};
use crate::domain::{AuthenticatedUser, UserId};
use crate::presentation::config::AuthSettings;

/// Validates access tokens with the hosted auth service's `/auth/v1/user` endpoint.
pub struct HttpIdentityProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl HttpIdentityProvider {
    pub fn new(settings: &AuthSettings) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| IdentityError::Unreachable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    #[tracing::instrument(skip_all)]
    async fn authenticate(&self, token: &str) -> Result<Option<AuthenticatedUser>, IdentityError> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| IdentityError::Unreachable(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::debug!("Access token rejected");
                return Ok(None);
            }
            status if !status.is_success() => {
                return Err(IdentityError::Unreachable(format!("HTTP {}", status)));
            }
            _ => {}
        }

        let user: UserResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;

        let id = Uuid::parse_str(&user.id)
            .map_err(|e| IdentityError::InvalidResponse(format!("user id: {e}")))?;

        Ok(Some(AuthenticatedUser {
            id: UserId::from_uuid(id),
            email: user.email,
        }))
    }
}
