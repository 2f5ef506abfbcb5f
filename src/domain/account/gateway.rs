use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::profile::UserProfile;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(rename = "$id")]
    pub id: String,
    pub user_id: String,
}

/// Account record returned when a new login is registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// User document written to the users collection after registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDocument {
    pub account_id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("A session is already active for this client")]
    SessionAlreadyActive,

    #[error("Account service error: {0}")]
    Service(String),
}

impl GatewayError {
    /// Map a raw backend error message onto a gateway error
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("session is active") {
            GatewayError::SessionAlreadyActive
        } else {
            GatewayError::Service(message)
        }
    }
}

/// Hosted account backend
#[async_trait]
pub trait AccountGateway: Send + Sync {
    async fn create_email_session(
        &self,
        credentials: &Credentials,
    ) -> Result<SessionInfo, GatewayError>;

    async fn delete_current_session(&self) -> Result<(), GatewayError>;

    async fn current_account(&self) -> Result<UserProfile, GatewayError>;

    async fn create_account(
        &self,
        name: &str,
        credentials: &Credentials,
    ) -> Result<AccountInfo, GatewayError>;

    async fn create_user_document(
        &self,
        document: &NewUserDocument,
    ) -> Result<UserProfile, GatewayError>;

    /// Avatar image generated from the user's initials
    fn initials_avatar_url(&self, name: &str) -> String;
}
