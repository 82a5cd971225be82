use booking_tui::{App, Cli, cleanup_old_logs, init_logger, tui};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logger(&cli.log_level, cli.log_json, &cli.log_dir)?;
    if let Err(e) = cleanup_old_logs(&cli.log_dir) {
        tracing::warn!(error = %e, "Failed to clean up old logs");
    }

    let config = cli.client_config();
    tracing::info!(server = %config.base_url, timeout = config.timeout, "Starting booking client");
    let api = Arc::new(config.build_http_client()?);

    let mut app = App::new(api);
    tui::run(&mut app).await
}
