//! Defines structures and builders related to sign-in configuration.
//!
//! Provides a structured way to handle the client identity and endpoints
//! required to assemble an authorization request.
//!
//! ## Structures
//! - `Config`: Stores all the necessary authorization request information.
//! - `ConfigBuilder`: A builder for constructing a `Config` instance.
//!
//! # Example
//! ```rust,no_run
//! use tiny_google_signin::config::Config;
//!
//! let config = Config::builder()
//!     .client_id("your-client-id")
//!     .redirect_uri("http://localhost:8080/auth/google")
//!     .build();
//! ```
//!
//! The authorization endpoint and scope default to Google's well-known
//! endpoint and `email profile`; both can be overridden (the endpoint
//! typically only for testing).

/// Google's OAuth2 authorization endpoint.
pub const GOOGLE_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Scope requested when the builder is left at its default.
pub const DEFAULT_SCOPE: [&str; 2] = ["email", "profile"];

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AuthEndPoint(pub String);

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ClientID(pub String);

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RedirectURI(pub String);

/// Holds all information required to build an authorization request.
///
/// It is designed to be immutable once constructed: a `Config` is built once
/// at startup and shared by reference, and a fresh request is built from it
/// per sign-in attempt.
///
/// # Fields
/// - `auth_endpoint`: The authorization endpoint URL.
/// - `client_id`: The client ID obtained from Google Cloud Console.
/// - `redirect_uri`: The redirect URI registered in Google Cloud Console.
///   Must match the registered value exactly; deployment specific, so there
///   is no default.
/// - `scope`: The permissions to request, in insertion order.
///
/// This struct is primarily built using the `ConfigBuilder`. The builder does
/// not validate; validation happens when an `AuthorizationRequest` is built
/// from the config.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) auth_endpoint: AuthEndPoint,
    pub(crate) client_id: ClientID,
    pub(crate) redirect_uri: RedirectURI,
    pub(crate) scope: Vec<String>,
}

// ==========impl Config==========
impl Config {
    /// Returns a new `ConfigBuilder` instance to create a `Config` object.
    /// This method provides a convenient way to start building a `Config` instance.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Provides a convenient way to create a `Config` instance step by step.
///
/// # Example
/// ```rust,no_run
/// use tiny_google_signin::config::ConfigBuilder;
///
/// let builder = ConfigBuilder::new()
///     .client_id("your-client-id")
///     .redirect_uri("https://your-app.com/auth/google")
///     .scope(&["email", "profile", "openid"]);
///
/// let config = builder.build();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    auth_endpoint: AuthEndPoint,
    client_id: ClientID,
    redirect_uri: RedirectURI,
    scope: Vec<String>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            auth_endpoint: AuthEndPoint(GOOGLE_AUTH_ENDPOINT.to_string()),
            client_id: ClientID::default(),
            redirect_uri: RedirectURI::default(),
            scope: DEFAULT_SCOPE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ==========impl ConfigBuilder==========
impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` instance with default values.
    pub fn new() -> Self {
        ConfigBuilder::default()
    }

    /// Overrides the authorization endpoint URL.
    /// Defaults to `GOOGLE_AUTH_ENDPOINT`; override it for testing.
    pub fn auth_endpoint(mut self, auth_endpoint: &str) -> ConfigBuilder {
        self.auth_endpoint = AuthEndPoint(auth_endpoint.to_string());
        self
    }

    /// Sets the client ID obtained from Google Cloud Console.
    pub fn client_id(mut self, client_id: &str) -> Self {
        self.client_id = ClientID(client_id.to_string());
        self
    }

    /// Sets the redirect URI registered in Google Cloud Console.
    pub fn redirect_uri(mut self, redirect_uri: &str) -> Self {
        self.redirect_uri = RedirectURI(redirect_uri.to_string());
        self
    }

    /// Replaces the requested scope. Order is kept as given.
    pub fn scope(mut self, scope: &[&str]) -> Self {
        self.scope = scope.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Constructs a `Config` instance with the provided values.
    pub fn build(self) -> Config {
        Config {
            auth_endpoint: self.auth_endpoint,
            client_id: self.client_id,
            redirect_uri: self.redirect_uri,
            scope: self.scope,
        }
    }
}
