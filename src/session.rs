//! Signed-in state
//!
//! The session is an ordinary value handed to whatever needs it (the navbar, the app)
//! rather than ambient global state. Credential storage lives elsewhere.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn login(&mut self, user: impl Into<String>) {
        let user = user.into();
        log::debug!("Signed in as {}", user);
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::debug!("Signed out {}", user);
        }
    }
}
