//! Cookie header parsing and the cookie-store seam.
//!
//! ARCHITECTURE
//! ============
//! Page logic never touches a process-wide cookie surface. Callers pass a
//! [`CookieStore`] explicitly, so the reader and the logout action run the
//! same against a browser-backed store, a request's `Cookie` header, or the
//! in-memory [`MemoryCookieStore`] used by the CLI and tests.
//!
//! PARSING
//! =======
//! A raw header is split on `;` into segments, and each segment is split once
//! on its first `=`. Only whole keys match, so a cookie whose value happens to
//! contain `userinfo=` can never shadow the real `userinfo` cookie.

use axum_extra::extract::cookie::Cookie;
use time::Duration;

/// Read/write access to the cookies visible to the page.
pub trait CookieStore {
    /// Current raw (still percent-encoded) value of `name`, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Write `name=value` with the given max-age. A zero or negative max-age
    /// removes the cookie.
    fn set_with_expiry(&mut self, name: &str, value: &str, max_age: Duration);
}

/// Iterate `(name, value)` pairs of a raw cookie header in order.
///
/// Segments without `=` are skipped. Names and values are trimmed of
/// surrounding whitespace; values are returned verbatim otherwise.
pub fn parse_cookie_header(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split(';').filter_map(|segment| {
        let (name, value) = segment.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some((name, value.trim()))
    })
}

/// Return the raw value of the first cookie named `name`.
///
/// Duplicate names resolve to the first occurrence.
#[must_use]
pub fn read_cookie<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    let found = parse_cookie_header(raw).find_map(|(key, value)| (key == name).then_some(value));
    if found.is_none() {
        tracing::debug!(cookie = name, "cookie not found");
    }
    found
}

/// Build the `Set-Cookie` directive for a write of `name=value`.
#[must_use]
pub fn set_cookie_directive(name: &str, value: &str, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name.to_owned(), value.to_owned()))
        .path("/")
        .max_age(max_age)
        .build()
}

/// Ordered in-memory cookie store.
///
/// Every write is recorded as a `Set-Cookie` directive so hosts can forward
/// them to a real user agent.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieStore {
    entries: Vec<(String, String)>,
    directives: Vec<Cookie<'static>>,
}

impl MemoryCookieStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a raw `Cookie` header. Later duplicates are dropped.
    #[must_use]
    pub fn from_header(raw: &str) -> Self {
        let mut store = Self::new();
        for (name, value) in parse_cookie_header(raw) {
            if !store.contains(name) {
                store.entries.push((name.to_owned(), value.to_owned()));
            }
        }
        store
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the live cookies back into `name=value; name=value` form.
    #[must_use]
    pub fn to_header(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// `Set-Cookie` directives produced by writes, oldest first.
    #[must_use]
    pub fn directives(&self) -> &[Cookie<'static>] {
        &self.directives
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn set_with_expiry(&mut self, name: &str, value: &str, max_age: Duration) {
        self.directives.push(set_cookie_directive(name, value, max_age));

        if max_age <= Duration::ZERO {
            self.entries.retain(|(key, _)| key != name);
            return;
        }
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => value.clone_into(&mut entry.1),
            None => self.entries.push((name.to_owned(), value.to_owned())),
        }
    }
}

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;
