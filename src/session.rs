//! Login navigation and logout cookie clearing.
//!
//! The OAuth flow behind `/github/login` is owned by the server; the page only
//! navigates there. Logout is purely client-side: the session cookies are
//! expired in place and the view drops back to the login section.

use time::Duration;

use crate::cookie::CookieStore;
use crate::display::{DisplayState, USERINFO_COOKIE};

/// Server path that starts the GitHub OAuth flow.
pub const LOGIN_PATH: &str = "/github/login";

/// Cookie holding the OAuth access token.
pub const AUTHORIZATION_COOKIE: &str = "Authorization";

/// Cookies cleared on logout.
pub const SESSION_COOKIES: [&str; 2] = [AUTHORIZATION_COOKIE, USERINFO_COOKIE];

/// Absolute location the login action navigates to.
#[must_use]
pub fn login_location(base_url: &str) -> String {
    format!("{}{LOGIN_PATH}", base_url.trim_end_matches('/'))
}

/// Expire every cookie in `cookies` and return the logged-out state.
pub fn logout<S, N>(store: &mut S, cookies: &[N]) -> DisplayState
where
    S: CookieStore + ?Sized,
    N: AsRef<str>,
{
    for name in cookies {
        store.set_with_expiry(name.as_ref(), "", Duration::ZERO);
    }
    tracing::info!(cleared = cookies.len(), "logged out");
    DisplayState::LoggedOut
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
