//! Static pre-rendering: every enumerated path written out as `index.html`.

use crate::config::SiteConfig;
use crate::content::GraphQlExecutor;
use crate::error::{ExportError, PageError};
use crate::pages;
use crate::render;
use maud::Markup;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const HOTEL_DIR: &str = "hotel-details";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Files written, relative to the output directory
    pub written: Vec<PathBuf>,
    /// Slugs that were enumerated but resolved to no hotel or were not routable
    pub skipped: Vec<String>,
}

/// Render the list page, every detail page, and a 404 page into `out_dir`.
///
/// Published content only. A slug that disappears between enumeration and
/// rendering is skipped; any content API failure aborts the export.
pub async fn export_site<E>(
    executor: &E,
    config: &SiteConfig,
    out_dir: &Path,
) -> Result<ExportSummary, ExportError>
where
    E: GraphQlExecutor + ?Sized,
{
    let mut summary = ExportSummary::default();

    let slugs = pages::static_paths(executor).await?;
    info!("Exporting {} hotel pages to {}", slugs.len(), out_dir.display());

    let home = pages::home(executor, config, false).await?;
    write_page(out_dir, Path::new("index.html"), home, &mut summary).await?;

    for slug in slugs {
        if !pages::is_routable_slug(&slug) {
            warn!(%slug, "Refusing to export a slug outside its own directory");
            summary.skipped.push(slug);
            continue;
        }
        match pages::hotel(executor, config, &slug, false).await {
            Ok(markup) => {
                let relative = Path::new(HOTEL_DIR).join(&slug).join("index.html");
                write_page(out_dir, &relative, markup, &mut summary).await?;
            }
            Err(PageError::NotFound(slug)) => {
                warn!(%slug, "Hotel vanished before it could be rendered, skipping");
                summary.skipped.push(slug);
            }
            Err(PageError::Content(err)) => return Err(err.into()),
        }
    }

    write_page(
        out_dir,
        Path::new("404.html"),
        render::not_found_page(config),
        &mut summary,
    )
    .await?;

    info!(
        "Wrote {} pages ({} skipped)",
        summary.written.len(),
        summary.skipped.len()
    );
    Ok(summary)
}

async fn write_page(
    out_dir: &Path,
    relative: &Path,
    markup: Markup,
    summary: &mut ExportSummary,
) -> Result<(), ExportError> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(&path, markup.into_string())
        .await
        .map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
    summary.written.push(relative.to_path_buf());
    Ok(())
}
