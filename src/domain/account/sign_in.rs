use super::gateway::{AccountGateway, Credentials, GatewayError};
use super::profile::UserProfile;

#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error("Please enter valid email and password")]
    MissingCredentials,

    #[error("Could not sign in. Please try again later.")]
    Unavailable,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Open a session and return the signed-in account.
///
/// A conflicting active session is closed and the sign-in retried exactly
/// once; the retry's outcome is final.
pub async fn sign_in(
    gateway: &dyn AccountGateway,
    credentials: &Credentials,
) -> Result<UserProfile, SignInError> {
    if !credentials.is_complete() {
        return Err(SignInError::MissingCredentials);
    }

    match gateway.create_email_session(credentials).await {
        Ok(session) => {
            tracing::debug!(session_id = %session.id, "Session created");
        }
        Err(GatewayError::SessionAlreadyActive) => {
            tracing::warn!(email = %credentials.email, "Session already active, signing out first");

            if let Err(e) = gateway.delete_current_session().await {
                tracing::warn!(error = %e, "Failed to close the active session");
                return Err(SignInError::Unavailable);
            }

            let session = gateway.create_email_session(credentials).await?;
            tracing::debug!(session_id = %session.id, "Session created on retry");
        }
        Err(e) => return Err(e.into()),
    }

    let profile = gateway.current_account().await?;
    tracing::info!(user_id = %profile.id, "Signed in");

    Ok(profile)
}
