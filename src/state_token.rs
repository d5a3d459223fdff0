//! Provides the `state` anti-CSRF token for the authorization request.
use base64::{Engine, engine::general_purpose::URL_SAFE};
use rand::{TryRngCore, rngs::OsRng};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::Error;

/// A randomly generated `state` value created using `OsRng` and Base64URL-encoded.
///
/// Carried as the `state` query parameter of the authorization request and
/// echoed back unchanged by Google on the callback. The callback handler must
/// compare the echoed value against the one generated here; a mismatch means
/// the callback was not initiated by this application.
///
/// The token is optional on the request. If you generate one, persist it
/// (session store, cookie-keyed map, ...) so the callback side can verify it.
/// It implements `Serialize`/`Deserialize` for that reason.
/// # Example
/// ```rust,no_run
/// use tiny_google_signin::state_token::StateToken;
///
/// let state = StateToken::new().expect("Failed to generate state token");
/// println!("state: {}", state.value());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateToken(pub(crate) String);

impl StateToken {
    /// Generates a new state token using a secure random generator.
    /// - Uses `OsRng` for cryptographic security.
    /// - Encodes the random bytes in Base64URL format.
    /// - Returns an `Error::GenToken` if the random generation fails.
    pub fn new() -> Result<Self, Error> {
        let mut key = [0u8; 32];
        OsRng.try_fill_bytes(&mut key).map_err(|e| {
            error!("Failed to generate state token: {:?}", e);
            Error::GenToken
        })?;
        Ok(Self(URL_SAFE.encode(key)))
    }

    /// Returns the state token as a string reference.
    pub fn value(&self) -> &str {
        &self.0
    }
}
