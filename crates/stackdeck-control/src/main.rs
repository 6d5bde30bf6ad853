use std::net::SocketAddr;
use std::sync::Arc;

use stackdeck_control::auth::{CredentialVerifier, SharedSecretPair};
use stackdeck_control::config::Config;
use stackdeck_control::portainer::PortainerClient;
use stackdeck_control::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let portainer = PortainerClient::new(&config)?;
    let verifier = config.operator.clone().map(|operator| {
        Arc::new(SharedSecretPair::new(operator.username, operator.password))
            as Arc<dyn CredentialVerifier>
    });
    if verifier.is_none() {
        tracing::warn!("no operator credentials configured; all endpoints are open");
    }

    let state = AppState {
        config: Arc::new(config),
        portainer,
        verifier,
    };
    let app = stackdeck_control::app(state);

    let addr: SocketAddr = ([0, 0, 0, 0], 5555).into();
    tracing::info!(%addr, "stackdeck-control HTTP listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
