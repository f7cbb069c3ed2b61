use super::*;
use crate::cookie::MemoryCookieStore;
use crate::display::resolve_display_state;

// =============================================================================
// login_location
// =============================================================================

#[test]
fn login_location_appends_path() {
    assert_eq!(login_location("http://localhost:8080"), "http://localhost:8080/github/login");
}

#[test]
fn login_location_trims_trailing_slash() {
    assert_eq!(login_location("https://nanny.example/"), "https://nanny.example/github/login");
}

#[test]
fn login_location_relative_base() {
    assert_eq!(login_location(""), "/github/login");
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn logout_clears_session_cookies() {
    let mut store =
        MemoryCookieStore::from_header("Authorization=abc; userinfo=%7B%22name%22%3A%22Ada%22%7D; theme=dark");
    assert!(resolve_display_state(&store.to_header()).is_logged_in());

    let state = logout(&mut store, &SESSION_COOKIES);

    assert_eq!(state, DisplayState::LoggedOut);
    assert!(!store.contains("Authorization"));
    assert!(!store.contains("userinfo"));
    assert!(store.contains("theme"));
    assert_eq!(resolve_display_state(&store.to_header()), DisplayState::LoggedOut);
}

#[test]
fn logout_emits_expiring_directives() {
    let mut store = MemoryCookieStore::from_header("Authorization=abc; userinfo=x");
    logout(&mut store, &SESSION_COOKIES);
    let directives: Vec<String> = store.directives().iter().map(ToString::to_string).collect();
    assert_eq!(directives.len(), 2);
    assert!(directives[0].starts_with("Authorization=;"));
    assert!(directives[1].starts_with("userinfo=;"));
    assert!(directives.iter().all(|d| d.contains("Max-Age=0") && d.contains("Path=/")));
}

#[test]
fn logout_on_empty_store_is_logged_out() {
    let mut store = MemoryCookieStore::new();
    assert_eq!(logout(&mut store, &SESSION_COOKIES), DisplayState::LoggedOut);
    assert!(store.is_empty());
}

#[test]
fn logout_accepts_owned_names() {
    let mut store = MemoryCookieStore::from_header("profile=x; keep=y");
    let names = vec!["profile".to_owned()];
    logout(&mut store, &names);
    assert_eq!(store.to_header(), "keep=y");
}
