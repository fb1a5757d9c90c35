//! Platform users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::subscription::SubscriptionPlan;

/// Account state, stored as a small integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserStatus {
    Normal,
    Disabled,
    /// Waiting for email verification.
    #[default]
    Pending,
}

impl UserStatus {
    pub fn code(&self) -> u8 {
        match self {
            UserStatus::Normal => 1,
            UserStatus::Disabled => 2,
            UserStatus::Pending => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(UserStatus::Normal),
            2 => Some(UserStatus::Disabled),
            3 => Some(UserStatus::Pending),
            _ => None,
        }
    }
}

impl Serialize for UserStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown user status code {code}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Password hash. Never copied into [`UserDto`].
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub status: UserStatus,
    pub last_login_time: DateTime<Utc>,
    #[serde(default)]
    pub current_plan: SubscriptionPlan,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
}

impl User {
    /// A pending, unverified user on the free plan.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: String::new(),
            avatar: String::new(),
            status: UserStatus::Pending,
            last_login_time: Utc::now(),
            current_plan: SubscriptionPlan::Free,
            email: email.into(),
            email_verified: false,
        }
    }

    pub fn verify_email(&mut self) {
        self.email_verified = true;
        if self.status == UserStatus::Pending {
            self.status = UserStatus::Normal;
        }
    }

    pub fn to_dto(&self, role: impl Into<String>) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username.clone(),
            avatar: self.avatar.clone(),
            status: self.status,
            last_login_time: self.last_login_time,
            current_plan: self.current_plan,
            email: self.email.clone(),
            email_verified: self.email_verified,
            role: role.into(),
        }
    }
}

/// The user as exposed to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub avatar: String,
    pub status: UserStatus,
    pub last_login_time: DateTime<Utc>,
    pub current_plan: SubscriptionPlan,
    pub email: String,
    pub email_verified: bool,
    pub role: String,
}
