mod structured_text;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub use structured_text::{Document, Mark, Node};

/// The CMS sends `null` for list fields that were never filled in.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Image data produced by the `ResponsiveImageFragment`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveImage {
    pub src: String,
    pub src_set: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub sizes: Option<String>,
    pub base64: Option<String>,
}

/// An upload field; `responsiveImage` is null for non-image uploads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub responsive_image: Option<ResponsiveImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Amenity {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bed {
    pub bed_type: String,
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub name: String,
    pub max_occupancy: Option<u32>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub beds: Vec<Bed>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub photos: Vec<Photo>,
}

/// Question/answer record referenced from a structured-text document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// A structured-text field together with the records it references
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructuredText {
    pub value: serde_json::Value,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub blocks: Vec<FaqEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<FaqEntry>,
}

impl StructuredText {
    /// Looks up a referenced record in `blocks` first, then `links`.
    pub fn record(&self, id: &str) -> Option<&FaqEntry> {
        self.blocks
            .iter()
            .chain(self.links.iter())
            .find(|entry| entry.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub brand_name: String,
    pub website: Option<String>,
    pub logo: Option<Photo>,
    pub brand_faqs: Option<StructuredText>,
}

/// Full hotel record as returned by the detail query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    #[serde(rename = "_firstPublishedAt")]
    pub first_published_at: Option<DateTime<Utc>>,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub amenities: Vec<Amenity>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_amenities: Vec<Amenity>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub room_types: Vec<RoomType>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gallery: Vec<Photo>,
    pub featured_photo: Option<Photo>,
    pub faq: Option<StructuredText>,
    pub brand: Option<Brand>,
}

/// Hotel row shown on the list page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelSummary {
    pub id: String,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelSlug {
    pub slug: String,
}
