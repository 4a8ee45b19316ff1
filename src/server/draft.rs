//! Draft mode: a cookie that makes page loaders request unpublished content.
//!
//! The cookie value is a keyed BLAKE3 tag derived from the configured draft
//! secret, so it cannot be forged without the secret and stops working when
//! the secret changes or is removed.

use crate::config::SiteConfig;
use crate::render;
use crate::server::AppState;
use axum::extract::{Query, State};
use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{info, warn};

pub const COOKIE_NAME: &str = "hotel_site_draft";

const COOKIE_KEY_CONTEXT: &str = "hotel-site draft mode cookie v1";

#[derive(Debug, Deserialize)]
pub struct EnableParams {
    pub token: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DisableParams {
    pub url: Option<String>,
}

/// Cookie value that marks a request as draft mode under `secret`.
pub fn cookie_value(secret: &str) -> String {
    hex::encode(cookie_tag(secret).as_bytes())
}

fn cookie_tag(secret: &str) -> blake3::Hash {
    let key = blake3::derive_key(COOKIE_KEY_CONTEXT, secret.as_bytes());
    blake3::keyed_hash(&key, COOKIE_NAME.as_bytes())
}

fn decode_tag(value: &str) -> Option<blake3::Hash> {
    let bytes: [u8; blake3::OUT_LEN] = hex::decode(value).ok()?.try_into().ok()?;
    Some(blake3::Hash::from(bytes))
}

/// Whether the request carries a draft-mode cookie signed with the configured
/// secret. Always false when no secret is configured.
pub fn is_enabled(config: &SiteConfig, headers: &HeaderMap) -> bool {
    let Some(secret) = config.draft_secret.as_deref() else {
        return false;
    };
    let expected = cookie_tag(secret);

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == COOKIE_NAME)
        .filter_map(|(_, value)| decode_tag(value))
        // blake3::Hash equality is constant-time
        .any(|tag| tag == expected)
}

fn token_matches(token: &str, secret: &str) -> bool {
    blake3::hash(token.as_bytes()) == blake3::hash(secret.as_bytes())
}

pub async fn enable(State(state): State<AppState>, Query(params): Query<EnableParams>) -> Response {
    let Some(secret) = state.config.draft_secret.as_deref() else {
        return (StatusCode::NOT_FOUND, render::not_found_page(&state.config)).into_response();
    };

    if !params
        .token
        .as_deref()
        .is_some_and(|token| token_matches(token, secret))
    {
        warn!("Rejected draft mode request with an invalid token");
        return (StatusCode::UNAUTHORIZED, "Invalid token").into_response();
    }

    info!("Draft mode enabled");
    redirect_with_cookie(
        safe_redirect(params.url.as_deref()),
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            COOKIE_NAME,
            cookie_value(secret)
        ),
    )
}

pub async fn disable(Query(params): Query<DisableParams>) -> Response {
    info!("Draft mode disabled");
    redirect_with_cookie(
        safe_redirect(params.url.as_deref()),
        format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", COOKIE_NAME),
    )
}

/// Only same-site absolute paths; anything else goes home.
fn safe_redirect(url: Option<&str>) -> &str {
    match url {
        Some(url) if url.starts_with('/') && !url.starts_with("//") && !url.contains('\\') => url,
        _ => "/",
    }
}

fn redirect_with_cookie(location: &str, cookie: String) -> Response {
    (
        StatusCode::TEMPORARY_REDIRECT,
        [(LOCATION, location.to_string()), (SET_COOKIE, cookie)],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn reads_signed_cookie_among_others() {
        let config = SiteConfig::for_tests();
        assert!(!is_enabled(&config, &HeaderMap::new()));

        let signed = cookie_value("secret");
        let headers = cookie(&format!("theme=dark; hotel_site_draft={}; lang=en", signed));
        assert!(is_enabled(&config, &headers));
    }

    #[test]
    fn forged_or_foreign_cookies_are_ignored() {
        let config = SiteConfig::for_tests();

        assert!(!is_enabled(&config, &cookie("hotel_site_draft=1")));
        assert!(!is_enabled(&config, &cookie("hotel_site_draft=zz")));
        let other_secret = format!("hotel_site_draft={}", cookie_value("not-the-secret"));
        assert!(!is_enabled(&config, &cookie(&other_secret)));
    }

    #[test]
    fn no_secret_means_no_draft_mode() {
        let mut config = SiteConfig::for_tests();
        let signed = format!("hotel_site_draft={}", cookie_value("secret"));
        config.draft_secret = None;

        assert!(!is_enabled(&config, &cookie(&signed)));
    }

    #[test]
    fn token_check() {
        assert!(token_matches("secret", "secret"));
        assert!(!token_matches("secret ", "secret"));
        assert!(!token_matches("", "secret"));
    }

    #[test]
    fn redirects_stay_on_site() {
        assert_eq!(safe_redirect(Some("/hotel-details/x")), "/hotel-details/x");
        assert_eq!(safe_redirect(Some("//evil.example")), "/");
        assert_eq!(safe_redirect(Some("https://evil.example")), "/");
        assert_eq!(safe_redirect(Some("/\\evil.example")), "/");
        assert_eq!(safe_redirect(None), "/");
    }
}
