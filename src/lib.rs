//! Tiny library for starting "Sign in with Google".
//!
//! This library builds a spec-compliant OAuth2 Authorization Code request for
//! Google's authorization endpoint and hands the resulting URL to a
//! caller-supplied navigation capability. That is the whole job: validate
//! configuration, build a redirect URL, navigate.
//! [google document](https://developers.google.com/identity/protocols/oauth2/web-server)
//! # Feature
//! - Build an authorization request URL with `client_id`, `redirect_uri`,
//!   `response_type=code` and `scope`
//! - Generate an anti-CSRF `state` token and carry it on the request
//! - Hand the URL to any [`navigator::Navigator`] (HTTP redirect, location
//!   assignment, ...)
//! # Caution
//! - Token exchange, callback handling and session management are not
//!   implemented here. The server behind `redirect_uri` receives the
//!   authorization `code` (and the echoed `state`) and exchanges it for
//!   tokens itself.
//! - The `state` token is optional on the request but strongly recommended;
//!   without it the callback cannot tell whether the sign-in was initiated by
//!   your application.
//! # Examples
//! For example usage, see the `demos` directory.
pub mod config;
pub mod error;
pub mod navigator;
pub mod request;
pub mod state_token;
