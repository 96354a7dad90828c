use crate::{conf::Settings, prelude::{Error, Result}};

/// Verifies credentials and bearer tokens. Handlers depend only on this trait,
/// so a real identity provider can replace the static pair.
pub trait Authority: Send + Sync {
    /// Returns the token to hand back to the caller.
    fn login(&self, identifier: &str, secret: &str) -> Result<String>;

    /// Checks a raw `Authorization` header value.
    fn authorize(&self, header: Option<&str>) -> Result<()>;
}

/// One credential pair, one token, compared by exact string equality.
#[derive(Debug, Clone)]
pub struct StaticAuthority {
    identifier: String,
    secret: String,
    token: String,
}

impl StaticAuthority {
    pub fn new(
        identifier: impl Into<String>,
        secret: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        StaticAuthority {
            identifier: identifier.into(),
            secret: secret.into(),
            token: token.into(),
        }
    }

    pub fn from_settings(s: &Settings) -> Self {
        StaticAuthority::new(&s.auth_email, &s.auth_password, &s.auth_token)
    }
}

impl Authority for StaticAuthority {
    fn login(&self, identifier: &str, secret: &str) -> Result<String> {
        if identifier == self.identifier && secret == self.secret {
            Ok(self.token.clone())
        } else {
            Err(Error::InvalidCredentials)
        }
    }

    fn authorize(&self, header: Option<&str>) -> Result<()> {
        match header {
            Some(h) if h == self.token => Ok(()),
            _ => Err(Error::Unauthorized),
        }
    }
}
