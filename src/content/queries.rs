//! GraphQL documents for every page, with the fragments they share.

use crate::content::traits::Query;
use crate::content::types::NoVariables;
use crate::models::{Hotel, HotelSlug, HotelSummary};
use serde::{Deserialize, Serialize};

/// Upper bound on records fetched by list queries; there is no pagination.
pub const MAX_HOTELS: usize = 500;

pub const RESPONSIVE_IMAGE_FRAGMENT: &str = r#"
fragment ResponsiveImageFragment on ResponsiveImage {
  src
  srcSet
  width
  height
  alt
  title
  sizes
  base64
}
"#;

pub const FAQ_FRAGMENT: &str = r#"
fragment FaqFragment on FaqRecord {
  id
  question
  answer
}
"#;

pub const BRAND_FRAGMENT: &str = r#"
fragment BrandFragment on BrandRecord {
  id
  brandName
  website
  logo {
    responsiveImage {
      ...ResponsiveImageFragment
    }
  }
  brandFaqs {
    value
    blocks {
      ...FaqFragment
    }
    links {
      ...FaqFragment
    }
  }
}
"#;

/// Everything the detail page shows for one hotel
pub struct HotelDetailQuery;

#[derive(Debug, Clone, Serialize)]
pub struct HotelDetailVariables {
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelDetailData {
    pub hotel: Option<Hotel>,
}

impl Query for HotelDetailQuery {
    const OPERATION: &'static str = "HotelDetailQuery";
    const DOCUMENT: &'static str = r#"
query HotelDetailQuery($slug: String) {
  hotel(locale: en_US, filter: { slug: { eq: $slug } }) {
    id
    _firstPublishedAt
    name
    slug
    description
    website
    address
    phone
    amenities {
      name
      description
    }
    customAmenities {
      name
      description
    }
    roomTypes {
      name
      maxOccupancy
      description
      beds {
        bedType
        quantity
      }
      photos {
        responsiveImage {
          ...ResponsiveImageFragment
        }
      }
    }
    gallery {
      responsiveImage {
        ...ResponsiveImageFragment
      }
    }
    featuredPhoto {
      responsiveImage {
        ...ResponsiveImageFragment
      }
    }
    faq {
      value
      blocks {
        ...FaqFragment
      }
      links {
        ...FaqFragment
      }
    }
    brand {
      ...BrandFragment
    }
  }
}
"#;
    const FRAGMENTS: &'static [&'static str] =
        &[BRAND_FRAGMENT, FAQ_FRAGMENT, RESPONSIVE_IMAGE_FRAGMENT];

    type Variables = HotelDetailVariables;
    type Data = HotelDetailData;
}

/// Rows for the list page
pub struct AllHotelsQuery;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllHotelsData {
    pub all_hotels: Vec<HotelSummary>,
}

impl Query for AllHotelsQuery {
    const OPERATION: &'static str = "AllHotelsQuery";
    const DOCUMENT: &'static str = r#"
query AllHotelsQuery {
  allHotels(first: 500) {
    id
    slug
    name
  }
}
"#;

    type Variables = NoVariables;
    type Data = AllHotelsData;
}

/// Slugs for static path enumeration
pub struct HotelSlugsQuery;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSlugsData {
    pub all_hotels: Vec<HotelSlug>,
}

impl Query for HotelSlugsQuery {
    const OPERATION: &'static str = "HotelSlugsQuery";
    const DOCUMENT: &'static str = r#"
query HotelSlugsQuery {
  allHotels(first: 500) {
    slug
  }
}
"#;

    type Variables = NoVariables;
    type Data = HotelSlugsData;
}
