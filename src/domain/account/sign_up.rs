use super::gateway::{AccountGateway, Credentials, NewUserDocument};
use super::profile::UserProfile;
use super::sign_in::SignInError;

/// Register a new login, open a session for it and create its user document.
///
/// The user document carries an avatar generated from the name's initials.
pub async fn sign_up(
    gateway: &dyn AccountGateway,
    name: &str,
    credentials: &Credentials,
) -> Result<UserProfile, SignInError> {
    let name = name.trim();
    if name.is_empty() || !credentials.is_complete() {
        return Err(SignInError::MissingCredentials);
    }

    let account = gateway.create_account(name, credentials).await?;
    tracing::debug!(account_id = %account.id, "Account created");

    let session = gateway.create_email_session(credentials).await?;
    tracing::debug!(session_id = %session.id, "Session created");

    let document = NewUserDocument {
        account_id: account.id,
        name: name.to_string(),
        email: credentials.email.clone(),
        avatar: gateway.initials_avatar_url(name),
    };
    let profile = gateway.create_user_document(&document).await?;

    tracing::info!(user_id = %profile.id, "Signed up");
    Ok(profile)
}
