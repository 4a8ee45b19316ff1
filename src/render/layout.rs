use crate::models::{Photo, ResponsiveImage};
use maud::{html, Markup, DOCTYPE};

/// Document-level settings for one rendered page
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    /// Shows the draft banner
    pub draft: bool,
}

pub fn page(meta: &PageMeta, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                @if let Some(description) = &meta.description {
                    meta name="description" content=(description);
                }
            }
            body {
                @if meta.draft {
                    div.draft-banner {
                        "You are viewing draft content. "
                        a href="/api/draft-mode/disable" { "Exit draft mode" }
                    }
                }
                main { (content) }
            }
        }
    }
}

pub fn responsive_image(image: &ResponsiveImage) -> Markup {
    html! {
        img
            src=(image.src)
            srcset=[image.src_set.as_deref()]
            sizes=[image.sizes.as_deref()]
            width=[image.width]
            height=[image.height]
            alt=(image.alt.as_deref().unwrap_or(""))
            title=[image.title.as_deref()]
            loading="lazy";
    }
}

/// Uploads without image data (PDFs and the like) render nothing.
pub fn photo(photo: &Photo) -> Markup {
    html! {
        @if let Some(image) = &photo.responsive_image {
            (responsive_image(image))
        }
    }
}
