//! Server-rendered hotel pages backed by the DatoCMS GraphQL API.
//!
//! - [`content`]: query documents, the `execute_query` seam, and the HTTP client
//! - [`render`]: `maud` templates for the list and detail pages
//! - [`pages`]: fetch-then-render loaders and static path enumeration
//! - [`server`]: `axum` routes, draft-mode toggles, revalidation headers
//! - [`export`]: pre-rendering every path to static files

pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod models;
pub mod pages;
pub mod render;
pub mod server;

pub use config::SiteConfig;
pub use error::{ConfigError, ContentError, ExportError, PageError};
pub use server::{router, AppState};
