//! Abstracts the mechanism that moves the user's browsing context to the
//! authorization endpoint.
//!
//! The protocol only requires that a plain GET reaches the endpoint as a full
//! page navigation (the consent screen is an interactive page, so an
//! XHR/fetch is not conformant). How that navigation happens is up to the
//! embedding application: an HTTP 3xx redirect from a server handler, a
//! location assignment in a webview, a form submission. The request-building
//! logic stays unit-testable without any of them.

use url::Url;

/// Single-method capability for performing the navigation.
///
/// Navigation is fire-and-forget: it has no return value, cannot be cancelled
/// once invoked, and failures past this point (DNS, unreachable endpoint, the
/// user closing the consent screen) are surfaced by the browser or by the
/// callback handler, never here.
pub trait Navigator {
    fn navigate_to(&mut self, url: &Url);
}

/// Any `FnMut(&Url)` closure is a `Navigator`, so an HTTP handler can supply
/// one inline:
/// ```rust,no_run
/// # use url::Url;
/// let mut target: Option<Url> = None;
/// let mut navigator = |url: &Url| target = Some(url.clone());
/// ```
impl<F> Navigator for F
where
    F: FnMut(&Url),
{
    fn navigate_to(&mut self, url: &Url) {
        self(url)
    }
}
