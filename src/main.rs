//! Wiring & DI. Entry point: bootstrap adapters, inject into the pipeline, run once.
//! No business logic here; classification lives in usecases.

use dotenv::dotenv;
use pel_map::adapters::feed::{feed_source_for, is_remote};
use pel_map::adapters::render::HtmlRenderer;
use pel_map::adapters::taxonomy::JsonTaxonomySource;
use pel_map::ports::TaxonomySource;
use pel_map::shared::config::AppConfig;
use pel_map::usecases::MindMapService;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;

    // --- Feed: the only operator-facing precondition ---
    let feed_location = cfg.feed_or_default();
    if !is_remote(&feed_location)
        && !tokio::fs::try_exists(Path::new(&feed_location))
            .await
            .unwrap_or(false)
    {
        anyhow::bail!("{} not found. Please verify the file path.", feed_location);
    }
    let feed = feed_source_for(
        &feed_location,
        Duration::from_secs(cfg.fetch_timeout_secs_or_default()),
    )?;

    // --- Taxonomy: built-in unless overridden ---
    let taxonomy: Arc<dyn TaxonomySource> = match cfg.taxonomy_path.as_deref() {
        Some(path) => {
            info!(path, "using taxonomy file");
            Arc::new(JsonTaxonomySource::from_file(path))
        }
        None => Arc::new(JsonTaxonomySource::builtin()),
    };

    // --- Artifact: the single HTML page ---
    let renderer = Arc::new(HtmlRenderer::new(
        cfg.output_or_default(),
        cfg.page_title_or_default(),
    )?);

    let service = MindMapService::new(taxonomy, feed, renderer);
    let summary = service.run().await?;

    info!(
        episodes = summary.episodes,
        nodes = summary.active_nodes,
        discovered = summary.discovered_nodes,
        catch_all = summary.catch_all,
        dangling_refs = summary.dangling_refs,
        artifact = %summary.artifact.display(),
        "done"
    );

    Ok(())
}
