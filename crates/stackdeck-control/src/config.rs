use anyhow::Result;

/// Process-wide configuration, read from the environment once at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub host: String,
    pub stacks: Vec<String>,
    pub operator: Option<OperatorCredentials>,
    pub tls_insecure: bool,
}

#[derive(Debug, Clone)]
pub struct OperatorCredentials {
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = required_var("PORTAINER_API_KEY")?;
        let host = required_var("PORTAINER_HOST")?
            .trim_end_matches('/')
            .to_string();
        let stacks = parse_stack_list(&required_var("PORTAINER_STACKS")?);
        if stacks.is_empty() {
            anyhow::bail!("PORTAINER_STACKS must name at least one stack");
        }

        // The gate is only installed when both halves of the pair are set.
        let operator = match (optional_var("USERNAME"), optional_var("PASSWORD")) {
            (Some(username), Some(password)) => Some(OperatorCredentials { username, password }),
            _ => None,
        };

        let tls_insecure = flag_is_set(std::env::var("PORTAINER_TLS_INSECURE").ok());

        Ok(Self {
            api_key,
            host,
            stacks,
            operator,
            tls_insecure,
        })
    }
}

fn required_var(name: &'static str) -> Result<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow::anyhow!("{name} is required"))
}

fn optional_var(name: &'static str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_stack_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn flag_is_set(raw: Option<String>) -> bool {
    matches!(
        raw.unwrap_or_default().trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
