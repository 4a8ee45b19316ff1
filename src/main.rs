use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hotel_site::content::DatoClient;
use hotel_site::export::export_site;
use hotel_site::render::hotel_path;
use hotel_site::{pages, server, AppState, SiteConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hotel-site", version, about = "Hotel pages rendered from DatoCMS content")]
struct Cli {
    /// Configuration file (defaults to ./hotel-site.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve pages over HTTP
    Serve {
        /// Override the configured listen address
        #[arg(long)]
        bind: Option<String>,
    },
    /// Pre-render every page into a directory
    Export {
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
    /// Print the paths that would be pre-rendered
    Paths,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config =
        SiteConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let client = DatoClient::new(&config).context("Failed to create content API client")?;

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            let addr = config.bind_addr()?;
            info!("🏨 Serving {} from {}", config.site_name, config.api_endpoint);
            let state = AppState::new(config, Arc::new(client));
            server::serve(state, addr).await.context("HTTP server failed")?;
        }
        Command::Export { out } => {
            let summary = export_site(&client, &config, &out)
                .await
                .context("Export failed")?;
            info!("💾 Wrote {} files to {}", summary.written.len(), out.display());
            for slug in &summary.skipped {
                println!("skipped: {}", slug);
            }
        }
        Command::Paths => {
            let slugs = pages::static_paths(&client)
                .await
                .context("Failed to enumerate hotel slugs")?;
            println!("/");
            for slug in slugs {
                println!("{}", hotel_path(&slug));
            }
        }
    }

    Ok(())
}
