//! Login state shared by every page
//!
//! There is no credential check: any non-empty email and password log the
//! operator in. The state lives in process memory only.

use parking_lot::RwLock;
use tracing::info;

use crate::errors::{DotPlaceError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn { email: String },
}

#[derive(Debug)]
pub struct Session {
    state: RwLock<SessionState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionState::LoggedOut),
        }
    }

    /// Session that starts logged in, for deployments without the login gate
    pub fn logged_in(email: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(SessionState::LoggedIn {
                email: email.into(),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.read(), SessionState::LoggedIn { .. })
    }

    pub fn current_email(&self) -> Option<String> {
        match &*self.state.read() {
            SessionState::LoggedIn { email } => Some(email.clone()),
            SessionState::LoggedOut => None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Logs in when both fields are non-empty
    ///
    /// Logging in again replaces the current email.
    pub fn login(&self, email: &str, password: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(DotPlaceError::validation(
                "Email and password are both required",
            ));
        }
        *self.state.write() = SessionState::LoggedIn {
            email: email.to_string(),
        };
        info!("Operator logged in: {}", email);
        Ok(())
    }

    /// Returns whether a session was actually ended
    pub fn logout(&self) -> bool {
        let previous = std::mem::replace(&mut *self.state.write(), SessionState::LoggedOut);
        match previous {
            SessionState::LoggedIn { email } => {
                info!("Operator logged out: {}", email);
                true
            }
            SessionState::LoggedOut => false,
        }
    }
}
