/// Session holder the form reports to after a successful registration.
pub trait AuthContext {
    fn login(&mut self, token: String);
    fn set_message(&mut self, text: String);
}

/// In-memory auth context for a single user session.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Option<String>,
    message: Option<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The status message is shown once.
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }
}

impl AuthContext for SessionContext {
    fn login(&mut self, token: String) {
        tracing::debug!("Session token stored");
        self.token = Some(token);
    }

    fn set_message(&mut self, text: String) {
        self.message = Some(text);
    }
}
