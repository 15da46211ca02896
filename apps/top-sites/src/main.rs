//! Top Sites demo binary.
//!
//! Seeds an in-memory store with the configured default sites, pins,
//! renames and removes a site through the use cases, then prints the
//! Prometheus metrics.
//!
//! Usage: `top-sites [config.yaml]`

use std::sync::Arc;

use anyhow::Context;
use top_sites::config::{Config, TelemetrySink, load_config};
use top_sites::observability::{init_logging, init_metrics};
use top_sites::{
    InMemoryTopSitesStorage, MetricsTelemetry, NoOpTelemetry, TopSiteId, TopSitesStorage,
    TopSitesTelemetry, TopSitesUseCases,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Some(path.as_str())).with_context(|| format!("loading {path}"))?,
        None => Config::default(),
    };

    init_logging(&config.observability.logging)?;

    let storage = Arc::new(InMemoryTopSitesStorage::new());
    match config.telemetry.effective_sink() {
        TelemetrySink::Metrics => {
            let handle = init_metrics()?;
            run(&config, storage, Arc::new(MetricsTelemetry)).await?;
            println!("{}", handle.render());
        }
        TelemetrySink::Noop => run(&config, storage, Arc::new(NoOpTelemetry)).await?,
    }

    Ok(())
}

async fn run<T>(
    config: &Config,
    storage: Arc<InMemoryTopSitesStorage>,
    telemetry: Arc<T>,
) -> anyhow::Result<()>
where
    T: TopSitesTelemetry + 'static,
{
    let use_cases = TopSitesUseCases::new(Arc::clone(&storage), telemetry);

    for site in &config.default_sites {
        use_cases.add_pinned_sites().execute_site(site)?;
    }

    use_cases
        .add_pinned_sites()
        .execute("Example", "https://example.com")?;

    let pinned = storage
        .top_sites()?
        .into_iter()
        .find(|s| s.url == "https://example.com")
        .context("pinned site missing from storage")?;

    use_cases
        .update_top_sites()
        .execute(&pinned, "Example Domain", "https://www.example.com")?;

    for site in storage.top_sites()? {
        tracing::info!(
            id = site.id.map(TopSiteId::get),
            kind = ?site.kind,
            is_default = site.is_default(),
            title = site.title.as_deref().unwrap_or_default(),
            url = %site.url,
            "Top site"
        );
    }

    let renamed = storage
        .top_sites()?
        .into_iter()
        .find(|s| s.url == "https://www.example.com")
        .context("updated site missing from storage")?;
    use_cases.remove_top_sites().execute(&renamed)?;

    use_cases.scope().wait_idle().await;
    tracing::info!(count = storage.top_sites_count()?, "Done");

    Ok(())
}
