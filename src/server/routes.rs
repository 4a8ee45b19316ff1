use crate::config::SiteConfig;
use crate::error::PageError;
use crate::pages;
use crate::render;
use crate::server::draft;
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use maud::Markup;
use tracing::{error, info};

pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let draft = draft::is_enabled(&state.config, &headers);
    match pages::home(state.executor.as_ref(), &state.config, draft).await {
        Ok(markup) => html(&state.config, markup, draft),
        Err(err) => page_error(&state.config, err.into()),
    }
}

pub async fn hotel(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let draft = draft::is_enabled(&state.config, &headers);
    match pages::hotel(state.executor.as_ref(), &state.config, &slug, draft).await {
        Ok(markup) => html(&state.config, markup, draft),
        Err(err) => page_error(&state.config, err),
    }
}

pub async fn not_found(State(state): State<AppState>) -> Response {
    (StatusCode::NOT_FOUND, render::not_found_page(&state.config)).into_response()
}

/// `Cache-Control` for a rendered page; the host re-renders after `revalidate_secs`.
pub fn cache_control(config: &SiteConfig, draft: bool) -> String {
    if draft {
        "private, no-store".to_string()
    } else {
        format!(
            "public, s-maxage={}, stale-while-revalidate",
            config.revalidate_secs
        )
    }
}

fn html(config: &SiteConfig, markup: Markup, draft: bool) -> Response {
    (
        StatusCode::OK,
        [(CACHE_CONTROL, cache_control(config, draft))],
        markup,
    )
        .into_response()
}

fn page_error(config: &SiteConfig, err: PageError) -> Response {
    match err {
        PageError::NotFound(slug) => {
            info!(%slug, "Hotel not found");
            (StatusCode::NOT_FOUND, render::not_found_page(config)).into_response()
        }
        PageError::Content(err) => {
            error!("Failed to load page content: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CACHE_CONTROL, "no-store".to_string())],
                render::server_error_page(config),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafts_are_never_cached() {
        let config = SiteConfig::for_tests();
        assert_eq!(cache_control(&config, true), "private, no-store");
        assert_eq!(
            cache_control(&config, false),
            "public, s-maxage=60, stale-while-revalidate"
        );
    }
}
