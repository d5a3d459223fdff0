//! This module handles building the authorization request that starts the
//! "Sign in with Google" OAuth2 Authorization Code flow.
//!
//! It provides the following key functionalities:
//! - Validating the configuration and assembling the request (`AuthorizationRequest`).
//! - Serializing the request as the authorization endpoint URL (`into_url`).
//! - Handing that URL to a [`Navigator`] (`redirect` / `build_and_redirect`).
//!
//! No network call is made here. The observable effect on success is a full
//! page navigation to the authorization endpoint carrying `client_id`,
//! `redirect_uri`, `response_type=code`, `scope` and, if supplied, `state`.
//! Everything after the navigation (consent, the code callback, token
//! exchange) belongs to the callback collaborator at the redirect URI.
//!
//! # Example
//! ```rust,no_run
//! use tiny_google_signin::{
//!     config::Config, request::build_and_redirect, state_token::StateToken,
//! };
//! use url::Url;
//!
//! let config = Config::builder()
//!     .client_id("your_client_id")
//!     .redirect_uri("http://localhost:8080/auth/google")
//!     .build();
//!
//! let state = StateToken::new().unwrap();
//! // persist `state` here so the callback handler can verify it
//!
//! let mut navigator = |url: &Url| {
//!     // respond with an HTTP redirect, assign location, ...
//! };
//! build_and_redirect(&config, Some(&state), &mut navigator).unwrap();
//! ```
//!
//! # Flow
//! 1. Build a `Config` once at startup.
//! 2. On each user-triggered sign-in, generate a `StateToken` and build a
//!    fresh `AuthorizationRequest` from the config.
//! 3. Navigate. Control leaves the application; the identity provider
//!    redirects back to `redirect_uri` with `code` and the echoed `state`.
use itertools::Itertools;
use tracing::error;
use url::Url;
use urlencoding::encode;

use crate::{
    config::{AuthEndPoint, ClientID, Config, RedirectURI},
    error::Error,
    navigator::Navigator,
    state_token::StateToken,
};

/// An immutable, validated authorization request.
///
/// Built per sign-in attempt from a shared `Config`; never mutated after
/// construction. Duplicate scope entries are dropped at construction,
/// keeping the first occurrence, so serialization is deterministic.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    auth_endpoint: AuthEndPoint,
    client_id: ClientID,
    response_type: String,
    scope: Vec<String>,
    redirect_uri: RedirectURI,
    state: Option<StateToken>,
}

impl AuthorizationRequest {
    /// Validates `config` and assembles a request.
    ///
    /// # Parameters
    /// - `config`: client id, redirect URI, scope and endpoint. Required
    ///   fields must be non-empty and the redirect URI must parse as an
    ///   absolute URI; otherwise the matching [`Error`] variant is returned
    ///   and nothing else happens.
    /// - `state`: optional anti-CSRF token. The upstream flow works without
    ///   it, but omitting it leaves the callback unable to tell whether the
    ///   sign-in was initiated by this application. Callers that pass one
    ///   must persist it for verification on the callback side.
    pub fn new(config: &Config, state: Option<&StateToken>) -> Result<Self, Error> {
        if config.client_id.0.is_empty() {
            return Err(Error::MissingClientID);
        }
        if config.redirect_uri.0.is_empty() {
            return Err(Error::MissingRedirectURI);
        }
        if let Err(e) = Url::parse(&config.redirect_uri.0) {
            error!("Failed to parse redirect_uri: {}", e);
            return Err(Error::InvalidRedirectURI);
        }
        if config.scope.is_empty() {
            return Err(Error::EmptyScope);
        }

        Ok(Self {
            auth_endpoint: config.auth_endpoint.to_owned(),
            client_id: config.client_id.to_owned(),
            response_type: "code".to_string(),
            scope: config.scope.iter().unique().cloned().collect(),
            redirect_uri: config.redirect_uri.to_owned(),
            state: state.cloned(),
        })
    }

    /// Serializes the request as the authorization endpoint URL.
    ///
    /// Query parameters are written in insertion order (`client_id`,
    /// `redirect_uri`, `response_type`, `scope`, then `state` if present)
    /// with each value percent-encoded, space as `%20`. The same request
    /// always yields the byte-identical URL. Any query already present on
    /// the endpoint is replaced.
    pub fn into_url(&self) -> Result<Url, Error> {
        let mut url = Url::parse(&self.auth_endpoint.0).map_err(|e| {
            error!("Failed to parse authorization endpoint: {}", e);
            Error::URL
        })?;

        let scope = self.scope.iter().join(" ");
        let mut query = format!(
            "client_id={}&redirect_uri={}&response_type={}&scope={}",
            encode(&self.client_id.0),
            encode(&self.redirect_uri.0),
            self.response_type,
            encode(&scope),
        );
        if let Some(state) = &self.state {
            query.push_str("&state=");
            query.push_str(&encode(state.value()));
        }
        url.set_query(Some(&query));
        Ok(url)
    }

    /// Builds the URL and performs the navigation, the single side effect of
    /// this crate. Fire-and-forget: once the navigator is invoked, control
    /// leaves the application and nothing here observes the outcome.
    pub fn redirect<N>(self, navigator: &mut N) -> Result<(), Error>
    where
        N: Navigator,
    {
        let url = self.into_url()?;
        navigator.navigate_to(&url);
        Ok(())
    }
}

/// Validates `config`, builds the request and navigates in one call.
///
/// On any `Err` the navigator is never invoked and the user stays on the
/// current page; the caller should surface the error itself.
pub fn build_and_redirect<N>(
    config: &Config,
    state: Option<&StateToken>,
    navigator: &mut N,
) -> Result<(), Error>
where
    N: Navigator,
{
    AuthorizationRequest::new(config, state)?.redirect(navigator)
}

// ==========Tests==========
#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{config::ConfigBuilder, error::Error, state_token::StateToken};

    use super::{AuthorizationRequest, build_and_redirect};

    #[test]
    fn test_request_new_valid() {
        let auth_endpoint = "https://auth.example.com/auth";
        let client_id = "my_client_id";
        let redirect_uri = "https://redirect.example.com";

        let config = ConfigBuilder::new()
            .auth_endpoint(auth_endpoint)
            .client_id(client_id)
            .redirect_uri(redirect_uri)
            .scope(&["email", "profile"])
            .build();

        let req = AuthorizationRequest::new(&config, None).unwrap();

        assert_eq!(req.auth_endpoint.0, auth_endpoint);
        assert_eq!(req.client_id.0, client_id);
        assert_eq!(req.redirect_uri.0, redirect_uri);
        assert_eq!(req.response_type, "code");
        assert_eq!(req.scope, vec!["email".to_string(), "profile".to_string()]);
        assert!(req.state.is_none());
    }

    #[test]
    fn test_request_new_empty_client_id() {
        let config = ConfigBuilder::new()
            .client_id("")
            .redirect_uri("https://redirect.example.com")
            .build();

        let err = AuthorizationRequest::new(&config, None).unwrap_err();
        assert_eq!(err, Error::MissingClientID);
    }

    #[test]
    fn test_request_new_empty_redirect_uri() {
        let config = ConfigBuilder::new().client_id("my_client_id").build();

        let err = AuthorizationRequest::new(&config, None).unwrap_err();
        assert_eq!(err, Error::MissingRedirectURI);
    }

    #[test]
    fn test_request_new_relative_redirect_uri() {
        let config = ConfigBuilder::new()
            .client_id("my_client_id")
            .redirect_uri("/auth/google")
            .build();

        let err = AuthorizationRequest::new(&config, None).unwrap_err();
        assert_eq!(err, Error::InvalidRedirectURI);
    }

    #[test]
    fn test_request_new_empty_scope() {
        let config = ConfigBuilder::new()
            .client_id("my_client_id")
            .redirect_uri("https://redirect.example.com")
            .scope(&[])
            .build();

        let err = AuthorizationRequest::new(&config, None).unwrap_err();
        assert_eq!(err, Error::EmptyScope);
    }

    #[test]
    fn test_request_new_scope_duplicate() {
        let config = ConfigBuilder::new()
            .client_id("my_client_id")
            .redirect_uri("https://redirect.example.com")
            .scope(&["email", "profile", "email"])
            .build();

        let req = AuthorizationRequest::new(&config, None).unwrap();
        assert_eq!(req.scope, vec!["email".to_string(), "profile".to_string()]);
    }

    #[test]
    fn test_into_url_concrete_scenario() {
        let config = ConfigBuilder::new()
            .client_id("abc123")
            .redirect_uri("http://localhost:8080/auth/google")
            .scope(&["email", "profile"])
            .build();

        let url = AuthorizationRequest::new(&config, None)
            .unwrap()
            .into_url()
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://accounts.google.com/o/oauth2/v2/auth\
             ?client_id=abc123\
             &redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fauth%2Fgoogle\
             &response_type=code\
             &scope=email%20profile"
        );
    }

    #[test]
    fn test_into_url_query_round_trips() {
        let client_id = "my_client_id";
        let redirect_uri = "https://redirect.example.com/auth/callback";

        let config = ConfigBuilder::new()
            .auth_endpoint("https://auth.example.com/auth")
            .client_id(client_id)
            .redirect_uri(redirect_uri)
            .scope(&["email", "profile"])
            .build();

        let url = AuthorizationRequest::new(&config, None)
            .unwrap()
            .into_url()
            .unwrap();

        let params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            params,
            vec![
                ("client_id".to_string(), client_id.to_string()),
                ("redirect_uri".to_string(), redirect_uri.to_string()),
                ("response_type".to_string(), "code".to_string()),
                ("scope".to_string(), "email profile".to_string()),
            ]
        );
    }

    #[test]
    fn test_into_url_deterministic() {
        let config = ConfigBuilder::new()
            .client_id("my_client_id")
            .redirect_uri("https://redirect.example.com")
            .build();

        let first = AuthorizationRequest::new(&config, None)
            .unwrap()
            .into_url()
            .unwrap();
        let second = AuthorizationRequest::new(&config, None)
            .unwrap()
            .into_url()
            .unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_into_url_with_state() {
        let config = ConfigBuilder::new()
            .client_id("my_client_id")
            .redirect_uri("https://redirect.example.com")
            .build();

        let state = StateToken::new().unwrap();
        let url = AuthorizationRequest::new(&config, Some(&state))
            .unwrap()
            .into_url()
            .unwrap();

        let echoed = url
            .query_pairs()
            .find(|(k, _)| k == "state")
            .map(|(_, v)| v.to_string())
            .unwrap();
        assert_eq!(echoed, state.value());
    }

    #[test]
    fn test_into_url_bad_endpoint() {
        let config = ConfigBuilder::new()
            .auth_endpoint("not a url")
            .client_id("my_client_id")
            .redirect_uri("https://redirect.example.com")
            .build();

        let err = AuthorizationRequest::new(&config, None)
            .unwrap()
            .into_url()
            .unwrap_err();
        assert_eq!(err, Error::URL);
    }

    #[test]
    fn test_build_and_redirect_navigates() {
        let config = ConfigBuilder::new()
            .client_id("abc123")
            .redirect_uri("http://localhost:8080/auth/google")
            .build();

        let mut visited = Vec::new();
        let mut navigator = |url: &Url| visited.push(url.clone());

        build_and_redirect(&config, None, &mut navigator).unwrap();

        assert_eq!(visited.len(), 1);
        assert_eq!(
            visited[0].as_str(),
            "https://accounts.google.com/o/oauth2/v2/auth\
             ?client_id=abc123\
             &redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fauth%2Fgoogle\
             &response_type=code\
             &scope=email%20profile"
        );
    }

    #[test]
    fn test_build_and_redirect_invalid_config_no_navigation() {
        let config = ConfigBuilder::new()
            .redirect_uri("http://localhost:8080/auth/google")
            .build();

        let mut visited: Vec<Url> = Vec::new();
        let mut navigator = |url: &Url| visited.push(url.clone());

        let err = build_and_redirect(&config, None, &mut navigator).unwrap_err();
        assert_eq!(err, Error::MissingClientID);
        assert!(visited.is_empty());
    }
}
