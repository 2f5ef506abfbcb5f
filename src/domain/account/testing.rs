use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::gateway::{
    AccountGateway, AccountInfo, Credentials, GatewayError, NewUserDocument, SessionInfo,
};
use super::profile::UserProfile;

/// Gateway that replays scripted session results and records every call.
pub(crate) struct ScriptedGateway {
    sessions: Mutex<VecDeque<Result<SessionInfo, GatewayError>>>,
    logout: Result<(), GatewayError>,
    account: Result<AccountInfo, GatewayError>,
    calls: Mutex<Vec<&'static str>>,
    documents: Mutex<Vec<NewUserDocument>>,
}

impl ScriptedGateway {
    pub(crate) fn new(
        sessions: Vec<Result<SessionInfo, GatewayError>>,
        logout: Result<(), GatewayError>,
    ) -> Self {
        Self {
            sessions: Mutex::new(sessions.into()),
            logout,
            account: Ok(AccountInfo {
                id: "acc-1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            }),
            calls: Mutex::new(Vec::new()),
            documents: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing_account(mut self, error: GatewayError) -> Self {
        self.account = Err(error);
        self
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn documents(&self) -> Vec<NewUserDocument> {
        self.documents.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

pub(crate) fn session() -> Result<SessionInfo, GatewayError> {
    Ok(SessionInfo {
        id: "s1".to_string(),
        user_id: "u1".to_string(),
    })
}

pub(crate) fn credentials() -> Credentials {
    Credentials::new("ada@example.com", "hunter2")
}

#[async_trait]
impl AccountGateway for ScriptedGateway {
    async fn create_email_session(&self, _: &Credentials) -> Result<SessionInfo, GatewayError> {
        self.record("create");
        self.sessions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Service("unscripted".to_string())))
    }

    async fn delete_current_session(&self) -> Result<(), GatewayError> {
        self.record("delete");
        self.logout.clone()
    }

    async fn current_account(&self) -> Result<UserProfile, GatewayError> {
        self.record("account");
        Ok(UserProfile {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            avatar: None,
            address: None,
        })
    }

    async fn create_account(
        &self,
        _: &str,
        _: &Credentials,
    ) -> Result<AccountInfo, GatewayError> {
        self.record("register");
        self.account.clone()
    }

    async fn create_user_document(
        &self,
        document: &NewUserDocument,
    ) -> Result<UserProfile, GatewayError> {
        self.record("document");
        self.documents.lock().unwrap().push(document.clone());
        Ok(UserProfile {
            id: "doc-1".to_string(),
            name: document.name.clone(),
            email: document.email.clone(),
            avatar: Some(document.avatar.clone()),
            address: None,
        })
    }

    fn initials_avatar_url(&self, name: &str) -> String {
        format!("https://cdn.example/avatars/initials?name={}", name.replace(' ', "+"))
    }
}
