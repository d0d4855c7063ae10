//! Type-safe session access for the caller identity.
//!
//! Login flows are out of scope for the catalog; whatever authenticates callers
//! stores their user id under `auth:user`, and controllers read it back here to pass
//! an explicit `Identity` into mutating operations.

use tower_sessions::Session;

use crate::server::{error::AppError, model::identity::Identity};

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Identity session management.
pub struct IdentitySession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> IdentitySession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the caller's user id in the session.
    ///
    /// Whatever authenticates callers writes this key; the catalog itself only reads it.
    #[cfg(test)]
    pub async fn set_user_id(&self, user_id: impl Into<String>) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.into())
            .await?;
        Ok(())
    }

    /// Reads the caller identity.
    ///
    /// # Returns
    /// - `Ok(Identity::User(id))` - A user id is stored in the session
    /// - `Ok(Identity::Anonymous)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn identity(&self) -> Result<Identity, AppError> {
        let user_id = self.session.get::<String>(SESSION_AUTH_USER_ID).await?;

        Ok(user_id.map_or(Identity::Anonymous, Identity::User))
    }
}
