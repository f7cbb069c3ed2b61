//! `UserInfo` record and its cookie value codec.
//!
//! The cookie value is JSON, form-urlencoded by the server (spaces become
//! `+`). Decoding percent-decodes first and only then turns `+` into spaces,
//! so a literal `+` in the original text does not survive a round trip.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// Minimal profile rendered in the logged-in view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Public profile page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// Error returned by [`decode_user_info`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A `%` is not followed by two hex digits.
    #[error("userinfo cookie has an invalid percent escape at byte {0}")]
    InvalidEscape(usize),
    /// Percent-decoded bytes are not valid UTF-8.
    #[error("userinfo cookie is not valid UTF-8 after percent-decoding: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    /// Decoded text is not a JSON object of the expected shape.
    #[error("userinfo cookie is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a raw (percent-encoded) cookie value into a [`UserInfo`].
pub fn decode_user_info(raw_value: &str) -> Result<UserInfo, DecodeError> {
    check_escapes(raw_value)?;
    let decoded = percent_decode_str(raw_value).decode_utf8()?;
    let json = decoded.replace('+', " ");
    let value: serde_json::Value = serde_json::from_str(&json)?;
    if !value.is_object() {
        return Err(DecodeError::Malformed(serde::de::Error::custom("expected a JSON object")));
    }
    Ok(serde_json::from_value(value)?)
}

/// Reject `%` sequences that `percent_decode_str` would pass through verbatim.
fn check_escapes(raw: &str) -> Result<(), DecodeError> {
    let bytes = raw.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'%' {
            continue;
        }
        let escape = bytes.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(DecodeError::InvalidEscape(i));
        }
    }
    Ok(())
}

/// Encode a [`UserInfo`] the way the server writes the `userinfo` cookie.
pub fn encode_user_info(info: &UserInfo) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(info)?;
    Ok(url::form_urlencoded::byte_serialize(json.as_bytes()).collect())
}

#[cfg(test)]
#[path = "user_info_test.rs"]
mod tests;
