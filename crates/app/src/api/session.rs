//! Session state handed to API clients.

use std::fmt;

/// Credentials for the current user, if any.
///
/// Obtaining a token is out of scope; callers construct the session from
/// whatever they already hold.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A session without credentials.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// A session carrying a bearer token. Blank tokens are treated as absent.
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();

        Self {
            token: (!token.trim().is_empty()).then_some(token),
        }
    }

    /// The bearer token, if present.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_anonymous() {
        assert_eq!(Session::with_token("  "), Session::anonymous());
    }

    #[test]
    fn debug_output_redacts_token() {
        let output = format!("{:?}", Session::with_token("secret"));

        assert!(!output.contains("secret"), "token leaked: {output}");
    }
}
