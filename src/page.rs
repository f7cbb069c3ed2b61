//! Page controller: page load, login and logout over one cookie store.
//!
//! STATE
//! =====
//! `state` is the latest resolved [`DisplayState`]. Cookie loads replace it
//! outright (a decode failure falls back to logged-out). Remote loads replace
//! it on success and leave it untouched on failure, so the page stays on
//! whichever section it last showed.

use crate::config::{Config, ProfileSource};
use crate::cookie::CookieStore;
use crate::display::{CookieUserInfoReader, DisplayState};
use crate::profile::{ProfileClient, ProfileError, RemoteProfile};
use crate::session::{self, AUTHORIZATION_COOKIE, SESSION_COOKIES};
use crate::view::PageView;

/// Login/profile page bound to one cookie store and, for the remote
/// source, one profile client.
pub struct ProfilePage<S> {
    config: Config,
    store: S,
    reader: CookieUserInfoReader,
    client: Option<ProfileClient>,
    state: DisplayState,
    last_profile: Option<RemoteProfile>,
}

impl<S: CookieStore> ProfilePage<S> {
    /// Build a page over `store`. A remote source also builds the HTTP client.
    pub fn new(config: Config, store: S) -> Result<Self, ProfileError> {
        let client = match config.source {
            ProfileSource::Remote => Some(ProfileClient::new(&config.base_url, config.timeouts)?),
            ProfileSource::Cookie => None,
        };
        let reader = CookieUserInfoReader::new(config.cookie_name.clone());
        Ok(Self { config, store, reader, client, state: DisplayState::LoggedOut, last_profile: None })
    }

    #[must_use]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> PageView {
        PageView::render(&self.state)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Raw payload of the last successful remote load.
    #[must_use]
    pub fn last_profile(&self) -> Option<&RemoteProfile> {
        self.last_profile.as_ref()
    }

    /// Resolve the display state for page load.
    pub async fn load(&mut self) -> &DisplayState {
        match &self.client {
            None => {
                self.state = self.reader.resolve_store(&self.store);
            }
            Some(client) => {
                let token = self.store.get(AUTHORIZATION_COOKIE).filter(|t| !t.is_empty());
                match client.fetch(token.as_deref()).await {
                    Ok(profile) => {
                        self.state = DisplayState::LoggedIn(profile.user_info());
                        self.last_profile = Some(profile);
                    }
                    Err(e) => {
                        tracing::error!(error = %e, url = %client.profile_url(), "error fetching profile");
                    }
                }
            }
        }
        &self.state
    }

    /// Navigation target for the login action.
    #[must_use]
    pub fn login(&self) -> String {
        session::login_location(&self.config.base_url)
    }

    /// Clear the session cookies and show the login section.
    pub fn logout(&mut self) -> &DisplayState {
        let mut cookies = SESSION_COOKIES.map(str::to_owned).to_vec();
        if !cookies.contains(&self.config.cookie_name) {
            cookies.push(self.config.cookie_name.clone());
        }
        self.state = session::logout(&mut self.store, &cookies);
        self.last_profile = None;
        &self.state
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
