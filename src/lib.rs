//! Login/profile view switching driven by the `userinfo` session cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server runs the GitHub OAuth flow behind `/github/login` and leaves the
//! signed-in user's profile in a client-readable `userinfo` cookie (URL-encoded
//! JSON) next to the `Authorization` access-token cookie. On page load this
//! crate decides between the login section and the profile section, either
//! from that cookie or from a round trip to `/github/profile`.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. An absent or undecodable cookie resolves to the
//! logged-out view; a failed profile fetch is logged and leaves the view as
//! it was.

pub mod config;
pub mod cookie;
pub mod display;
pub mod page;
pub mod profile;
pub mod session;
pub mod user_info;
pub mod view;

pub use config::{Config, ConfigError, ProfileSource};
pub use cookie::{CookieStore, MemoryCookieStore, read_cookie};
pub use display::{CookieUserInfoReader, DisplayState, resolve_display_state};
pub use page::ProfilePage;
pub use profile::{ProfileClient, ProfileError, RemoteProfile};
pub use user_info::{DecodeError, UserInfo, decode_user_info, encode_user_info};
pub use view::PageView;
