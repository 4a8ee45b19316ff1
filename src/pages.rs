//! Fetch-then-render for each route.

use crate::config::SiteConfig;
use crate::content::queries::{
    AllHotelsQuery, HotelDetailQuery, HotelDetailVariables, HotelSlugsQuery,
};
use crate::content::{execute_query, GraphQlExecutor, NoVariables, QueryOptions};
use crate::error::{ContentError, PageError};
use crate::render;
use maud::Markup;
use tracing::{debug, warn};

/// The list page at `/`.
pub async fn home<E>(
    executor: &E,
    config: &SiteConfig,
    draft: bool,
) -> Result<Markup, ContentError>
where
    E: GraphQlExecutor + ?Sized,
{
    let data =
        execute_query::<AllHotelsQuery, _>(executor, &NoVariables {}, QueryOptions::drafts(draft))
            .await?;

    debug!("Rendering list page with {} hotels", data.all_hotels.len());
    Ok(render::home_page(&data.all_hotels, config, draft))
}

/// The detail page at `/hotel-details/{slug}`.
/// An unknown slug is [`PageError::NotFound`].
pub async fn hotel<E>(
    executor: &E,
    config: &SiteConfig,
    slug: &str,
    draft: bool,
) -> Result<Markup, PageError>
where
    E: GraphQlExecutor + ?Sized,
{
    let variables = HotelDetailVariables {
        slug: slug.to_string(),
    };
    let data =
        execute_query::<HotelDetailQuery, _>(executor, &variables, QueryOptions::drafts(draft))
            .await?;

    let hotel = data
        .hotel
        .ok_or_else(|| PageError::NotFound(slug.to_string()))?;

    debug!(slug = %hotel.slug, "Rendering hotel page");
    Ok(render::hotel_page(&hotel, config, draft))
}

/// Whether `slug` can name a detail route and an export directory: non-blank,
/// no path separators, no `..`.
pub fn is_routable_slug(slug: &str) -> bool {
    !slug.trim().is_empty() && !slug.contains(['/', '\\']) && !slug.contains("..")
}

/// Slugs of every published hotel, for pre-rendering detail pages.
pub async fn static_paths<E>(executor: &E) -> Result<Vec<String>, ContentError>
where
    E: GraphQlExecutor + ?Sized,
{
    let data =
        execute_query::<HotelSlugsQuery, _>(executor, &NoVariables {}, QueryOptions::default())
            .await?;

    let mut slugs = Vec::with_capacity(data.all_hotels.len());
    for hotel in data.all_hotels {
        if hotel.slug.trim().is_empty() {
            warn!("Skipping hotel with an empty slug");
            continue;
        }
        if !is_routable_slug(&hotel.slug) {
            warn!(slug = %hotel.slug, "Skipping hotel with a slug that is not a single path segment");
            continue;
        }
        slugs.push(hotel.slug);
    }
    Ok(slugs)
}
