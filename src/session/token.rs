//! Anti-forgery token and cookie extraction

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::ApiError;
use crate::transport::ApiResponse;

/// Name of the cookie carrying the anti-forgery token.
pub const CSRF_COOKIE: &str = "csrftoken";

// == Anti-Forgery Token ==
/// Token echoed as cookie and header on every authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntiForgeryToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl AntiForgeryToken {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// True once `now` is within `guard` of expiry.
    pub fn is_stale(&self, now: DateTime<Utc>, guard: Duration) -> bool {
        match add(now, guard) {
            Some(deadline) => self.expires_at <= deadline,
            None => true,
        }
    }

    /// True if the token may still be sent.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        !self.value.is_empty() && self.expires_at > now
    }

    /// Extracts the token from the response's `Set-Cookie` headers.
    ///
    /// Expiry comes from `Max-Age`, then `Expires`; a cookie carrying
    /// neither is assumed to live for `fallback_lifetime`.
    pub fn from_response(
        response: &ApiResponse,
        now: DateTime<Utc>,
        fallback_lifetime: Duration,
    ) -> Result<Self, ApiError> {
        response
            .set_cookies()
            .find_map(|header| Self::from_set_cookie(header, now, fallback_lifetime))
            .ok_or_else(|| ApiError::CookieMissing(CSRF_COOKIE.to_string()))
    }

    /// Parses one `Set-Cookie` value, returning `None` for other cookies.
    pub fn from_set_cookie(
        header: &str,
        now: DateTime<Utc>,
        fallback_lifetime: Duration,
    ) -> Option<Self> {
        let mut parts = header.split(';').map(str::trim);
        let (name, value) = parts.next()?.split_once('=')?;
        if name.trim() != CSRF_COOKIE {
            return None;
        }
        let value = value.trim().trim_matches('"');
        if value.is_empty() {
            return None;
        }

        let mut max_age = None;
        let mut expires = None;
        for attr in parts {
            let Some((key, val)) = attr.split_once('=') else {
                continue;
            };
            match key.trim().to_ascii_lowercase().as_str() {
                "max-age" => max_age = val.trim().parse::<i64>().ok(),
                "expires" => expires = parse_http_date(val.trim()),
                _ => {}
            }
        }

        let expires_at = match (max_age, expires) {
            (Some(secs), _) => add(now, Duration::from_secs(secs.max(0) as u64))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            (None, Some(at)) => at,
            (None, None) => add(now, fallback_lifetime).unwrap_or(now),
        };

        Some(Self::new(value, expires_at))
    }
}

fn add(now: DateTime<Utc>, d: Duration) -> Option<DateTime<Utc>> {
    chrono::Duration::from_std(d)
        .ok()
        .and_then(|d| now.checked_add_signed(d))
}

fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc2822(value) {
        return Some(at.with_timezone(&Utc));
    }
    // Netscape-style "Wed, 21-Oct-2026 07:28:00 GMT"
    NaiveDateTime::parse_from_str(value, "%a, %d-%b-%Y %H:%M:%S GMT")
        .ok()
        .map(|naive| naive.and_utc())
}
