//! Error types for content fetching, page loading, and configuration.

use reqwest::StatusCode;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl std::fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            let path: Vec<String> = self
                .path
                .iter()
                .map(|segment| match segment {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            write!(f, "{} (at {})", self.message, path.join("."))
        }
    }
}

/// Failures talking to the content API
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("content API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("content API returned errors for {operation}: {}", join_errors(.errors))]
    GraphQl {
        operation: String,
        errors: Vec<GraphQlError>,
    },

    #[error("failed to encode variables for {operation}: {source}")]
    Encode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("content API response for {0} had no data")]
    MissingData(String),

    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

fn join_errors(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Outcome of loading a page that could not be rendered
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no hotel with slug {0:?}")]
    NotFound(String),

    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Failures while pre-rendering the site to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
