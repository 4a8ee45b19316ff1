//! Shared fixtures: an in-memory content API and a test configuration.

#![allow(dead_code)]

use async_trait::async_trait;
use hotel_site::content::{GraphQlExecutor, GraphQlRequest, GraphQlResponse, QueryOptions};
use hotel_site::{ContentError, SiteConfig};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

pub fn config() -> SiteConfig {
    config_with(&[])
}

pub fn config_with(extra: &[(&str, &str)]) -> SiteConfig {
    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("HOTEL_SITE_API_TOKEN".into(), "test-token".into());
    vars.insert("HOTEL_SITE_SITE_NAME".into(), "Test Hotels".into());
    vars.insert("HOTEL_SITE_DRAFT_SECRET".into(), "let-me-in".into());
    vars.insert(
        "HOTEL_SITE_EDITOR_BASE_URL".into(),
        "https://example.admin.datocms.com/".into(),
    );
    for (key, value) in extra {
        vars.insert(key.to_string(), value.to_string());
    }
    let env = ::config::Environment::with_prefix(hotel_site::config::ENV_PREFIX).source(Some(vars));
    SiteConfig::from_sources(None, env).expect("test config")
}

/// The sparse hostel record used throughout the page tests.
pub fn getaway_hostel() -> Value {
    json!({
        "id": "101",
        "_firstPublishedAt": "2024-05-01T10:00:00Z",
        "slug": "getaway-hostel",
        "name": "Chicago Getaway Hostel",
        "description": null,
        "website": null,
        "address": null,
        "phone": null,
        "amenities": [],
        "customAmenities": [],
        "roomTypes": [],
        "gallery": [],
        "featuredPhoto": null,
        "faq": null,
        "brand": null
    })
}

pub fn lakeside_inn() -> Value {
    json!({
        "id": "102",
        "_firstPublishedAt": "2023-11-20T08:30:00Z",
        "slug": "lakeside-inn",
        "name": "Lakeside Inn",
        "description": "<p>Quiet rooms by the water.</p>",
        "website": "https://lakeside.example",
        "address": "1 Shore Dr, Chicago",
        "phone": "+1 312 555 0100",
        "amenities": [{"name": "Pool", "description": null}],
        "customAmenities": [{"name": "Kayak rental", "description": "Summer only"}],
        "roomTypes": [{
            "name": "Lake View King",
            "maxOccupancy": 2,
            "description": "Top floor",
            "beds": [{"bedType": "King", "quantity": 1}],
            "photos": [{"responsiveImage": {
                "src": "https://img.example/room.jpg",
                "srcSet": null, "width": 1200, "height": 800,
                "alt": "Room", "title": null, "sizes": null, "base64": null
            }}]
        }],
        "gallery": [],
        "featuredPhoto": null,
        "faq": {
            "value": {"schema": "dast", "document": {"type": "root", "children": [
                {"type": "block", "item": "faq-1"}
            ]}},
            "blocks": [{"id": "faq-1", "question": "Is parking available?", "answer": "Yes, $20 per night."}],
            "links": []
        },
        "brand": {
            "id": "b1",
            "brandName": "Shoreline Hotels",
            "website": "https://shoreline.example",
            "logo": null,
            "brandFaqs": null
        }
    })
}

/// Answers the site's queries from fixed records, the way the content API would.
#[derive(Default)]
pub struct FakeContent {
    published: BTreeMap<String, Value>,
    drafts: BTreeMap<String, Value>,
    /// Slugs listed by the enumeration queries but missing from detail lookups
    ghost_slugs: Vec<String>,
    pub fail: bool,
    pub requests: Mutex<Vec<(String, Value, bool)>>,
}

impl FakeContent {
    pub fn with_hotels(hotels: Vec<Value>) -> Self {
        let mut fake = Self::default();
        for hotel in hotels {
            let slug = hotel["slug"].as_str().expect("slug").to_string();
            fake.published.insert(slug, hotel);
        }
        fake
    }

    pub fn with_draft(mut self, hotel: Value) -> Self {
        let slug = hotel["slug"].as_str().expect("slug").to_string();
        self.drafts.insert(slug, hotel);
        self
    }

    pub fn with_ghost(mut self, slug: &str) -> Self {
        self.ghost_slugs.push(slug.to_string());
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn operations(&self) -> Vec<(String, bool)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(op, _, drafts)| (op.clone(), *drafts))
            .collect()
    }

    fn visible(&self, include_drafts: bool) -> BTreeMap<String, Value> {
        let mut visible = self.published.clone();
        if include_drafts {
            visible.extend(self.drafts.clone());
        }
        visible
    }
}

#[async_trait]
impl GraphQlExecutor for FakeContent {
    async fn execute(
        &self,
        request: &GraphQlRequest,
        options: QueryOptions,
    ) -> Result<GraphQlResponse, ContentError> {
        self.requests.lock().unwrap().push((
            request.operation_name.clone(),
            request.variables.clone(),
            options.include_drafts,
        ));

        if self.fail {
            return Err(ContentError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: "maintenance".into(),
            });
        }

        let hotels = self.visible(options.include_drafts);
        let data = match request.operation_name.as_str() {
            "AllHotelsQuery" => {
                let rows: Vec<Value> = hotels
                    .values()
                    .map(|h| json!({"id": h["id"], "slug": h["slug"], "name": h["name"]}))
                    .collect();
                json!({ "allHotels": rows })
            }
            "HotelSlugsQuery" => {
                let mut slugs: Vec<Value> = hotels.keys().map(|s| json!({"slug": s})).collect();
                slugs.extend(self.ghost_slugs.iter().map(|s| json!({"slug": s})));
                json!({ "allHotels": slugs })
            }
            "HotelDetailQuery" => {
                let slug = request.variables["slug"].as_str().unwrap_or_default();
                json!({ "hotel": hotels.get(slug).cloned().unwrap_or(Value::Null) })
            }
            other => panic!("unexpected operation {}", other),
        };

        Ok(GraphQlResponse {
            data: Some(data),
            errors: vec![],
        })
    }

    fn endpoint(&self) -> &str {
        "memory"
    }
}
