//! Detail page for a single hotel.
//!
//! Each optional field of [`Hotel`] either renders its section or an explicit
//! fallback line; nothing is silently dropped except the gallery and the
//! featured photo.

use crate::config::SiteConfig;
use crate::models::{Amenity, Brand, Hotel, RoomType};
use crate::render::layout::{page, photo, PageMeta};
use crate::render::{structured_text, text};
use maud::{html, Markup, PreEscaped};
use reqwest::Url;

const META_DESCRIPTION_CHARS: usize = 160;
const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

pub const NO_ROOMS: &str = "Room information not available for this hotel.";
pub const NO_AMENITIES: &str = "Amenities not specified.";
pub const NO_CUSTOM_AMENITIES: &str = "No additional amenities.";
pub const NO_FAQ: &str = "No frequently asked questions for this hotel.";
pub const NO_WEBSITE: &str = "Website not available.";
pub const NO_BRAND: &str = "This hotel is not affiliated with a brand.";

pub fn hotel_page(hotel: &Hotel, config: &SiteConfig, draft: bool) -> Markup {
    let meta = PageMeta {
        title: format!("{} | {}", hotel.name, config.site_name),
        description: hotel
            .description
            .as_deref()
            .map(|d| text::excerpt(d, META_DESCRIPTION_CHARS))
            .filter(|d| !d.is_empty()),
        draft,
    };

    page(
        &meta,
        html! {
            article.hotel {
                header {
                    h1 { (hotel.name) }
                    @if let Some(brand) = &hotel.brand {
                        p.brand-name { "A " (brand.brand_name) " hotel" }
                    }
                    @if let Some(featured) = &hotel.featured_photo {
                        figure.featured-photo { (photo(featured)) }
                    }
                }

                section.description {
                    @match present(&hotel.description) {
                        Some(description) => { (PreEscaped(description)) }
                        None => p.fallback { "No description available." }
                    }
                }

                (contact(hotel))

                section.amenities {
                    h2 { "Amenities" }
                    (amenity_list(&hotel.amenities, NO_AMENITIES))
                }

                section.custom-amenities {
                    h2 { "Also at this hotel" }
                    (amenity_list(&hotel.custom_amenities, NO_CUSTOM_AMENITIES))
                }

                section.rooms {
                    h2 { "Rooms" }
                    @if hotel.room_types.is_empty() {
                        p.fallback { (NO_ROOMS) }
                    } @else {
                        @for room in &hotel.room_types {
                            (room_type(room))
                        }
                    }
                }

                @if !hotel.gallery.is_empty() {
                    section.gallery {
                        h2 { "Gallery" }
                        @for item in &hotel.gallery {
                            figure { (photo(item)) }
                        }
                    }
                }

                section.faq {
                    h2 { "Frequently asked questions" }
                    @match hotel.faq.as_ref().and_then(structured_text::render) {
                        Some(faq) => { (faq) }
                        None => p.fallback { (NO_FAQ) }
                    }
                }

                section.brand {
                    h2 { "Brand" }
                    @match &hotel.brand {
                        Some(brand) => { (brand_details(brand)) }
                        None => p.fallback { (NO_BRAND) }
                    }
                }

                @if let Some(published) = hotel.first_published_at {
                    footer {
                        "Published at "
                        time datetime=(published.to_rfc3339()) {
                            (published.format("%B %-d, %Y").to_string())
                        }
                    }
                }
            }
        },
    )
}

fn contact(hotel: &Hotel) -> Markup {
    html! {
        section.contact {
            h2 { "Contact" }
            @match present(&hotel.address) {
                Some(street) => {
                    address { (street) }
                    @if let Some(url) = directions_url(street) {
                        a.directions href=(url.as_str()) { "Get directions" }
                    }
                }
                None => p.fallback { "Address not available." }
            }
            @if let Some(phone) = present(&hotel.phone) {
                p.phone { a href=(format!("tel:{}", phone.replace(' ', ""))) { (phone) } }
            }
            @match present(&hotel.website) {
                Some(website) => {
                    p.website {
                        a.visit-site href=(website) { "Visit site" }
                        " "
                        a.book-direct href=(website) { "Book direct" }
                    }
                }
                None => p.fallback { (NO_WEBSITE) }
            }
        }
    }
}

/// A cleared CMS string field comes back as `""`; treat blank as absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn directions_url(address: &str) -> Option<Url> {
    Url::parse_with_params(MAPS_SEARCH_URL, &[("api", "1"), ("query", address)]).ok()
}

fn amenity_list(amenities: &[Amenity], fallback: &str) -> Markup {
    html! {
        @if amenities.is_empty() {
            p.fallback { (fallback) }
        } @else {
            ul {
                @for amenity in amenities {
                    li {
                        strong { (amenity.name) }
                        @if let Some(description) = &amenity.description {
                            ": " (description)
                        }
                    }
                }
            }
        }
    }
}

fn room_type(room: &RoomType) -> Markup {
    html! {
        div.room-type {
            h3 { (room.name) }
            @if let Some(max) = room.max_occupancy {
                p.occupancy { "Sleeps " (max) }
            }
            @if let Some(description) = &room.description {
                p { (description) }
            }
            ul.beds {
                @for bed in &room.beds {
                    li.bed {
                        @if let Some(quantity) = bed.quantity {
                            (quantity) " × "
                        }
                        (bed.bed_type)
                    }
                }
            }
            @for item in &room.photos {
                figure { (photo(item)) }
            }
        }
    }
}

fn brand_details(brand: &Brand) -> Markup {
    html! {
        h3 { (brand.brand_name) }
        @if let Some(logo) = &brand.logo {
            div.brand-logo { (photo(logo)) }
        }
        @if let Some(website) = present(&brand.website) {
            p { a.brand-site href=(website) { "Brand website" } }
        }
        @if let Some(faq) = brand.brand_faqs.as_ref().and_then(structured_text::render) {
            h4 { "Brand FAQs" }
            (faq)
        }
    }
}
