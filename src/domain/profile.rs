use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Pink,
    Blue,
    Purple,
    Green,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Pink => "pink",
            Theme::Blue => "blue",
            Theme::Purple => "purple",
            Theme::Green => "green",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pink" => Ok(Theme::Pink),
            "blue" => Ok(Theme::Blue),
            "purple" => Ok(Theme::Purple),
            "green" => Ok(Theme::Green),
            other => Err(format!("Invalid theme: {}", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-user preferences loaded when a client starts and saved whenever they change.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub theme: Theme,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn with_defaults(user_id: UserId, email: Option<&str>) -> Self {
        Self {
            user_id,
            display_name: email
                .and_then(|e| e.split('@').next())
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            theme: Theme::default(),
            updated_at: Utc::now(),
        }
    }
}

/// Identity resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: Option<String>,
}
