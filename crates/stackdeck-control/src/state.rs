use std::sync::Arc;

use crate::auth::CredentialVerifier;
use crate::config::Config;
use crate::portainer::PortainerClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub portainer: PortainerClient,
    /// `None` when no operator credentials are configured; every endpoint is
    /// open in that case.
    pub verifier: Option<Arc<dyn CredentialVerifier>>,
}
