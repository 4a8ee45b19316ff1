use crate::config::SiteConfig;
use crate::models::HotelSummary;
use crate::render::layout::{page, PageMeta};
use crate::render::hotel_path;
use maud::{html, Markup};

/// List page: one detail link and one CMS edit link per hotel.
pub fn home_page(hotels: &[HotelSummary], config: &SiteConfig, draft: bool) -> Markup {
    let meta = PageMeta {
        title: format!("Home | {}", config.site_name),
        description: None,
        draft,
    };

    page(
        &meta,
        html! {
            h1 { (config.site_name) }
            h2 { "Hotels" }
            @if hotels.is_empty() {
                p.fallback { "No hotels published yet." }
            } @else {
                ul.hotel-list {
                    @for hotel in hotels {
                        li {
                            a href=(hotel_path(&hotel.slug)) { strong { (hotel.name) } }
                            " ("
                            a.edit-link href=(config.editor_url(&hotel.id)) { "edit" }
                            ")"
                        }
                    }
                }
            }
        },
    )
}
