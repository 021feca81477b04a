use nativeguictrl_stub::{install_signal_handler, StubConfig, StubService};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("NATIVEGUICTRL_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let config = StubConfig::from_env();
    info!("nativeguictrl-stub starting, bus: {}", config.address);

    let service = StubService::new(config);
    install_signal_handler(&service.shutdown_handle())?;
    service.run().await?;

    Ok(())
}
