use crate::config::SiteConfig;
use crate::render::layout::{page, PageMeta};
use maud::{html, Markup};

pub fn not_found_page(config: &SiteConfig) -> Markup {
    let meta = PageMeta {
        title: format!("Not found | {}", config.site_name),
        description: None,
        draft: false,
    };
    page(
        &meta,
        html! {
            h1 { "Page not found" }
            p { "We couldn't find what you were looking for." }
            p { a href="/" { "Back to all hotels" } }
        },
    )
}

/// Shown for content API failures; details go to the log, not the visitor.
pub fn server_error_page(config: &SiteConfig) -> Markup {
    let meta = PageMeta {
        title: format!("Error | {}", config.site_name),
        description: None,
        draft: false,
    };
    page(
        &meta,
        html! {
            h1 { "Something went wrong" }
            p { "This page could not be loaded right now. Please try again shortly." }
        },
    )
}
