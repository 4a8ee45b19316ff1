use crate::error::GraphQlError;
use serde::{Deserialize, Serialize};

/// Per-request switches for the content API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Include unpublished (draft) record versions
    pub include_drafts: bool,
}

impl QueryOptions {
    pub fn drafts(include_drafts: bool) -> Self {
        Self { include_drafts }
    }
}

/// Body POSTed to the GraphQL endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: serde_json::Value,
    pub operation_name: String,
}

/// Standard GraphQL response envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// Variables for queries that take none; serializes as `{}`
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoVariables {}
