use reception_bot::channels::SlackChannel;
use reception_bot::config::BotConfig;
use reception_bot::error::Error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider before any TLS usage
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Set the bot token first:  export BOT_API_KEY=xoxb-...");
            return Err(Error::from(e).into());
        }
    };

    eprintln!("📦 Reception Bot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Name: {}", config.name);
    eprintln!("   Slack API: {}", config.api_base);
    eprintln!("   Reconnect delay: {:?}\n", config.reconnect_delay);

    let slack = SlackChannel::new(config);

    tokio::select! {
        result = slack.run() => result.map_err(Error::from)?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
        }
    }

    Ok(())
}
