//! Remote profile fetch — `GET /github/profile` on the server.
//!
//! The server resolves the `Authorization` cookie against GitHub and echoes
//! the user payload back. This client only forwards the cookie, keeps the raw
//! response for display, and pulls out the `html_url` link. No retries, no
//! caching; callers log failures and keep their current view.

use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::Timeouts;
use crate::display::DisplayState;
use crate::session::AUTHORIZATION_COOKIE;
use crate::user_info::UserInfo;
use crate::view::PageView;

/// Server path returning the logged-in user's GitHub profile.
pub const PROFILE_PATH: &str = "/github/profile";

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("profile endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("profile response is not JSON: {0}")]
    Body(#[from] serde_json::Error),
    #[error("invalid authorization cookie value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// Profile payload as returned by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteProfile {
    /// Full response body.
    pub raw: Value,
    /// Link to the user's GitHub page, when the payload carries one.
    pub html_url: Option<String>,
}

impl RemoteProfile {
    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        let html_url = string_field(&raw, "html_url");
        Self { raw, html_url }
    }

    /// Project the payload onto the fields the page displays.
    #[must_use]
    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            name: string_field(&self.raw, "name"),
            avatar_url: string_field(&self.raw, "avatar_url"),
            html_url: self.html_url.clone(),
        }
    }

    /// Text/JSON view of the payload, linking to `html_url`.
    #[must_use]
    pub fn view(&self) -> PageView {
        PageView::render(&DisplayState::LoggedIn(self.user_info()))
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// HTTP client for the profile endpoint.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(base_url: &str, timeouts: Timeouts) -> Result<Self, ProfileError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("{}{PROFILE_PATH}", self.base_url)
    }

    /// Fetch the profile, forwarding the access token as the `Authorization`
    /// cookie when one is given.
    pub async fn fetch(&self, authorization: Option<&str>) -> Result<RemoteProfile, ProfileError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = authorization {
            headers.insert(COOKIE, HeaderValue::from_str(&format!("{AUTHORIZATION_COOKIE}={token}"))?);
        }

        let response = self.http.get(self.profile_url()).headers(headers).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProfileError::Status { status: status.as_u16(), body: body.trim().to_owned() });
        }

        let raw: Value = serde_json::from_str(&body)?;
        tracing::debug!(html_url = ?string_field(&raw, "html_url"), "profile fetched");
        Ok(RemoteProfile::from_value(raw))
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
