use relay_tg::RelayConfig;
use relay_tg::listener;
use relay_tg::tracing_setup;
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = RelayConfig::load()?;

    let _guard = tracing_setup::init_with_stdout("order_relay", &config.log_dir, Level::INFO);
    tracing::info!(?config, "Configuration loaded");

    listener::start(&config).await
}
