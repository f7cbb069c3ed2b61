//! Resolve the page's display state from the `userinfo` cookie.

use serde::Serialize;

use crate::cookie::{CookieStore, read_cookie};
use crate::user_info::{UserInfo, decode_user_info};

/// Cookie carrying the URL-encoded JSON profile.
pub const USERINFO_COOKIE: &str = "userinfo";

/// Which view the page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum DisplayState {
    #[default]
    LoggedOut,
    LoggedIn(UserInfo),
}

impl DisplayState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            Self::LoggedIn(user) => Some(user),
            Self::LoggedOut => None,
        }
    }
}

/// Reads one named cookie and turns it into a [`DisplayState`].
#[derive(Debug, Clone)]
pub struct CookieUserInfoReader {
    cookie_name: String,
}

impl Default for CookieUserInfoReader {
    fn default() -> Self {
        Self::new(USERINFO_COOKIE)
    }
}

impl CookieUserInfoReader {
    #[must_use]
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self { cookie_name: cookie_name.into() }
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Resolve against a raw `Cookie` header string.
    #[must_use]
    pub fn resolve(&self, raw_cookies: &str) -> DisplayState {
        self.resolve_value(read_cookie(raw_cookies, &self.cookie_name))
    }

    /// Resolve against a cookie store.
    #[must_use]
    pub fn resolve_store(&self, store: &impl CookieStore) -> DisplayState {
        let value = store.get(&self.cookie_name);
        if value.is_none() {
            tracing::debug!(cookie = %self.cookie_name, "cookie not found");
        }
        self.resolve_value(value.as_deref())
    }

    fn resolve_value(&self, value: Option<&str>) -> DisplayState {
        let Some(raw) = value.filter(|v| !v.is_empty()) else {
            return DisplayState::LoggedOut;
        };
        match decode_user_info(raw) {
            Ok(user) => DisplayState::LoggedIn(user),
            Err(e) => {
                tracing::error!(error = %e, cookie = %self.cookie_name, "error parsing userinfo cookie");
                DisplayState::LoggedOut
            }
        }
    }
}

/// Resolve the display state from the default `userinfo` cookie.
#[must_use]
pub fn resolve_display_state(raw_cookies: &str) -> DisplayState {
    CookieUserInfoReader::default().resolve(raw_cookies)
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;
