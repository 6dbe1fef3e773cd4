use std::sync::Arc;

use cinescout::app::AppState;
use cinescout::config::Config;
use cinescout::services::providers::{MovieProvider, RecommenderApi};
use cinescout::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing()?;

    tracing::info!(api_base_url = %config.api_base_url, "Starting cinescout");

    let provider: Arc<dyn MovieProvider> = Arc::new(RecommenderApi::new(config.api_base_url));
    tui::run(provider, AppState::default()).await?;

    Ok(())
}

/// The TUI owns stdout, so diagnostics go to a log file instead
fn init_tracing() -> anyhow::Result<()> {
    let log_file = std::fs::File::create("cinescout.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}
