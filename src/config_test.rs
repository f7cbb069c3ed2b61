use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize env mutation across the tests in this module.
fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_guard`].
unsafe fn clear_profile_view_env() {
    unsafe {
        std::env::remove_var("PROFILE_VIEW_BASE_URL");
        std::env::remove_var("PROFILE_VIEW_COOKIE_NAME");
        std::env::remove_var("PROFILE_VIEW_SOURCE");
        std::env::remove_var("PROFILE_VIEW_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("PROFILE_VIEW_CONNECT_TIMEOUT_SECS");
    }
}

// =============================================================================
// Config::from_env
// =============================================================================

#[test]
fn from_env_defaults() {
    let _guard = env_guard();
    unsafe { clear_profile_view_env() };

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.cookie_name, "userinfo");
    assert_eq!(cfg.source, ProfileSource::Remote);
    assert_eq!(cfg.timeouts.request, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.timeouts.connect, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_profile_view_env();
        std::env::set_var("PROFILE_VIEW_BASE_URL", "https://nanny.example/");
        std::env::set_var("PROFILE_VIEW_COOKIE_NAME", " profile ");
        std::env::set_var("PROFILE_VIEW_SOURCE", "Cookie");
        std::env::set_var("PROFILE_VIEW_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("PROFILE_VIEW_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://nanny.example");
    assert_eq!(cfg.cookie_name, "profile");
    assert_eq!(cfg.source, ProfileSource::Cookie);
    assert_eq!(cfg.timeouts, Timeouts { request: Duration::from_secs(42), connect: Duration::from_secs(7) });

    unsafe { clear_profile_view_env() };
}

#[test]
fn from_env_blank_cookie_name_falls_back() {
    let _guard = env_guard();
    unsafe {
        clear_profile_view_env();
        std::env::set_var("PROFILE_VIEW_COOKIE_NAME", "   ");
    }

    assert_eq!(Config::from_env().unwrap().cookie_name, "userinfo");

    unsafe { clear_profile_view_env() };
}

#[test]
fn from_env_unknown_source_errors() {
    let _guard = env_guard();
    unsafe {
        clear_profile_view_env();
        std::env::set_var("PROFILE_VIEW_SOURCE", "ldap");
    }

    let err = Config::from_env().unwrap_err();
    assert_eq!(err, ConfigError::UnknownSource("ldap".into()));
    assert!(err.to_string().contains("unknown PROFILE_VIEW_SOURCE"));

    unsafe { clear_profile_view_env() };
}

#[test]
fn from_env_invalid_timeout_errors() {
    let _guard = env_guard();
    unsafe {
        clear_profile_view_env();
        std::env::set_var("PROFILE_VIEW_REQUEST_TIMEOUT_SECS", "soon");
    }

    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: "PROFILE_VIEW_REQUEST_TIMEOUT_SECS", .. }));

    unsafe { clear_profile_view_env() };
}

// =============================================================================
// ProfileSource
// =============================================================================

#[test]
fn profile_source_parse() {
    assert_eq!("remote".parse::<ProfileSource>(), Ok(ProfileSource::Remote));
    assert_eq!(" COOKIE ".parse::<ProfileSource>(), Ok(ProfileSource::Cookie));
    assert!("both".parse::<ProfileSource>().is_err());
}
