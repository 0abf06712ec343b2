use anyhow::Context;
use tokio::net::TcpListener;

use impacto::configuration::get_configuration;
use impacto::startup::{get_app_state, run};
use impacto::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::get_subscriber("impacto".into(), "info".into(), std::io::stdout);
    telemetry::initialize_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration")?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {} for application", address))?;
    tracing::info!("Listening on {}", address);

    let state = get_app_state(&configuration);
    run(listener, state).await;

    Ok(())
}
