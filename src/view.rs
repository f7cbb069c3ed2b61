//! Page surface: the login/profile section pair and the profile fields.
//!
//! Exactly one section is visible at a time. Fields are filled only from
//! values that are present and non-empty, so an absent field is never
//! rendered as placeholder text.

use std::fmt;

use serde::Serialize;

use crate::display::DisplayState;

pub const LOGIN_SECTION: &str = "login-section";
pub const PROFILE_SECTION: &str = "profile-section";

/// The section currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Login,
    Profile,
}

impl Section {
    /// Element id of the section.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Login => LOGIN_SECTION,
            Self::Profile => PROFILE_SECTION,
        }
    }
}

/// Rendered page state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub visible: Section,
    /// `userName` text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// `userAvatar` image source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    /// `userProfile` link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<String>,
}

impl PageView {
    #[must_use]
    pub fn render(state: &DisplayState) -> Self {
        match state {
            DisplayState::LoggedOut => Self::default(),
            DisplayState::LoggedIn(user) => Self {
                visible: Section::Profile,
                user_name: non_empty(user.name.as_deref()),
                user_avatar: non_empty(user.avatar_url.as_deref()),
                user_profile: non_empty(user.html_url.as_deref()),
            },
        }
    }

    /// Whether the section with element id `id` is displayed.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.id() == id
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.visible.id())?;
        let fields = [
            ("name", &self.user_name),
            ("avatar", &self.user_avatar),
            ("profile", &self.user_profile),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                writeln!(f, "  {label}: {value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
