use anyhow::Result;
use encyclopedia::config::{self, Config};
use encyclopedia::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber: `RUST_LOG`-style filter, text or JSON output.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.is_json_logging() {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
