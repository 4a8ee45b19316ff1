//! HTML rendering with compile-time `maud` templates.
//! Renderers are pure: they take fetched records and return markup.

pub mod errors;
pub mod home;
pub mod hotel;
pub mod layout;
pub mod structured_text;
pub mod text;

pub use errors::{not_found_page, server_error_page};
pub use home::home_page;
pub use hotel::hotel_page;

use reqwest::Url;

const ROUTE_BASE: &str = "http://localhost/hotel-details/";

/// Route of the detail page for `slug`, percent-encoded as a single path segment.
pub fn hotel_path(slug: &str) -> String {
    let Ok(mut url) = Url::parse(ROUTE_BASE) else {
        return format!("/hotel-details/{}", slug);
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(slug);
    }
    url.path().to_string()
}
