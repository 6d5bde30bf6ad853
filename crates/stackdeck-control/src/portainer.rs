use std::time::Duration;

use anyhow::Context;
use reqwest::Method;
use serde::Deserialize;
use stackdeck_core::StackDescriptor;

use crate::config::Config;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Failure while resolving a stack name against the remote list.
///
/// The `Display` text of each variant is returned to the operator verbatim.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Failed to locate Stack {0}")]
    NotFound(String),
    #[error("Portainer Error (ID): {status} - {body}")]
    Api { status: u16, body: String },
    #[error("Server Error (ID): {0}")]
    Request(#[from] reqwest::Error),
}

/// Failure of a start/stop call issued after a successful lookup.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Portainer error: {status}\n{body}")]
    Api { status: u16, body: String },
    #[error("Server error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Stack entry as returned by `GET /api/stacks`.
#[derive(Debug, Deserialize)]
struct RemoteStack {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Id")]
    id: i64,
    #[serde(rename = "EndpointId")]
    endpoint_id: i64,
    #[serde(rename = "Status")]
    status: i64,
}

/// Client for the remote fleet-management API.
///
/// Every call carries the configured API key; nothing is cached between
/// requests and no retry is attempted.
#[derive(Clone)]
pub struct PortainerClient {
    http: reqwest::Client,
    host: String,
    api_key: String,
}

impl PortainerClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        if config.tls_insecure {
            tracing::warn!("remote TLS certificate verification is disabled");
        }
        let http = reqwest::Client::builder()
            .user_agent("stackdeck-control")
            .timeout(Duration::from_secs(30))
            .danger_accept_invalid_certs(config.tls_insecure)
            .build()
            .context("failed to build reqwest client")?;
        Ok(Self {
            http,
            host: config.host.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Resolves `name` to its remote id, endpoint id and current status by
    /// scanning the full stack list. Exact, case-sensitive match; first hit
    /// wins.
    pub async fn resolve_stack(&self, name: &str) -> Result<StackDescriptor, LookupError> {
        let resp = self
            .http
            .get(format!("{}/api/stacks", self.host))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let stacks = resp.json::<Vec<RemoteStack>>().await?;
        for stack in stacks {
            if stack.name == name {
                tracing::info!(stack = name, id = stack.id, "resolved stack");
                return Ok(StackDescriptor {
                    name: stack.name,
                    id: stack.id,
                    endpoint_id: stack.endpoint_id,
                    status: stack.status,
                });
            }
        }
        Err(LookupError::NotFound(name.to_string()))
    }

    /// Issues a single call to `path` on the remote service. Any failure is
    /// carried back in the returned error; there is no shared error state.
    pub async fn invoke_action(&self, method: Method, path: &str) -> Result<(), ActionError> {
        let resp = match self
            .http
            .request(method, format!("{}{}", self.host, path))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::error!(error = %err, "portainer request failed");
                return Err(ActionError::Request(err));
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "portainer call failed");
            return Err(ActionError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
