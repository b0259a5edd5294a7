//! Client credentials.
//!
//! The secret key is wrapped in [`SecretString`] so it never shows up in
//! `Debug` output and is zeroed on drop.

use secrecy::{ExposeSecret, SecretString};

/// Static credentials shared by every request a client issues.
///
/// Credentials are immutable once built; clone them to share across clients.
///
/// # Examples
///
/// ```
/// use mws_auth::Credentials;
///
/// let creds = Credentials::new("AKID", "wJalrXUtnFEMI", "A1SELLER").with_auth_token("amzn.mws.token");
/// assert_eq!(creds.access_key_id(), "AKID");
/// assert_eq!(creds.auth_token(), Some("amzn.mws.token"));
/// assert!(!format!("{creds:?}").contains("wJalrXUtnFEMI"));
/// ```
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_key: SecretString,
    seller_id: String,
    auth_token: Option<String>,
}

impl Credentials {
    /// Create credentials without an MWS auth token.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_key: impl Into<String>,
        seller_id: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_key: SecretString::from(secret_key.into()),
            seller_id: seller_id.into(),
            auth_token: None,
        }
    }

    /// Attach an MWS auth token. An empty token is treated as absent.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.auth_token = (!token.is_empty()).then_some(token);
        self
    }

    /// The `AWSAccessKeyId` value.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The `SellerId` value.
    #[must_use]
    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }

    /// The `MWSAuthToken` value, if one was configured.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Expose the secret key for signing. Never log the return value.
    pub(crate) fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &"[REDACTED]")
            .field("seller_id", &self.seller_id)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
