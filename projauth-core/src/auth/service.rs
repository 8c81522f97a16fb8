//! Mock authentication service
//!
//! Every call succeeds once the form validates. No backend is contacted:
//! login and registration mint a `mock_jwt_token_<millis>` token and store
//! it with the user profile in the local store.

use crate::auth::validation;
use crate::error::{AuthError, ProjauthError};
use crate::store::{KeyValueStore, TOKEN_KEY, USER_KEY};
use crate::types::{Session, SessionToken, User};
use secrecy::SecretString;
use tracing::{debug, info, instrument};

/// Prefix of every issued mock token
pub const MOCK_TOKEN_PREFIX: &str = "mock_jwt_token_";

/// Mock auth service over a key-value store
#[derive(Debug)]
pub struct MockAuthService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> MockAuthService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sign in. The profile name is fixed since there is no backend.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &SecretString) -> Result<Session, ProjauthError> {
        validation::validate_login(email, password)?;

        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        };

        let session = self.persist_session(user)?;
        info!("Logged in");
        Ok(session)
    }

    /// Create an account and sign in
    #[instrument(skip(self, password))]
    pub fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<Session, ProjauthError> {
        validation::validate_registration(first_name, last_name, email, password)?;

        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };

        let session = self.persist_session(user)?;
        info!("Registered");
        Ok(session)
    }

    /// Drop the stored session
    pub fn logout(&mut self) -> Result<(), ProjauthError> {
        self.store.remove_item(TOKEN_KEY)?;
        self.store.remove_item(USER_KEY)?;
        info!("Logged out");
        Ok(())
    }

    /// Request a password reset link (logged only)
    #[instrument(skip(self))]
    pub fn forgot_password(&self, email: &str) -> Result<(), ProjauthError> {
        validation::validate_forgot_password(email)?;
        info!("Password reset requested");
        Ok(())
    }

    /// Change a password (validated, then logged only)
    #[instrument(skip(self, new_password, confirm_password))]
    pub fn change_password(
        &self,
        email: &str,
        new_password: &SecretString,
        confirm_password: &SecretString,
    ) -> Result<(), ProjauthError> {
        validation::validate_change_password(email, new_password, confirm_password)?;
        info!("Password changed");
        Ok(())
    }

    /// Load the stored session
    ///
    /// Returns `None` unless both the token and the user profile are stored.
    pub fn restore(&self) -> Result<Option<Session>, ProjauthError> {
        let token = self.store.get_item(TOKEN_KEY)?;
        let user = self.store.get_item(USER_KEY)?;

        match (token, user) {
            (Some(token), Some(user)) => {
                let user: User = serde_json::from_str(&user).map_err(|e| {
                    AuthError::MalformedSession {
                        reason: e.to_string(),
                    }
                })?;
                debug!("Restored stored session");
                Ok(Some(Session {
                    user,
                    token: SessionToken::new(token),
                }))
            }
            _ => Ok(None),
        }
    }

    /// The signed-in user, or `AuthError::NotLoggedIn`
    pub fn current_user(&self) -> Result<User, ProjauthError> {
        self.restore()?
            .map(|session| session.user)
            .ok_or_else(|| ProjauthError::from(AuthError::NotLoggedIn))
    }

    fn persist_session(&mut self, user: User) -> Result<Session, ProjauthError> {
        let token = SessionToken::new(mint_token());
        let user_json = serde_json::to_string(&user).map_err(|e| AuthError::MalformedSession {
            reason: e.to_string(),
        })?;

        self.store.set_item(TOKEN_KEY, token.expose())?;
        self.store.set_item(USER_KEY, &user_json)?;

        Ok(Session { user, token })
    }
}

fn mint_token() -> String {
    format!("{}{}", MOCK_TOKEN_PREFIX, chrono::Utc::now().timestamp_millis())
}
