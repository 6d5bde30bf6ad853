use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine;

use crate::state::AppState;

/// Verifies operator credentials presented with a request.
///
/// The gate is installed as a whole-router layer; swapping the strategy means
/// swapping the implementation behind this trait, not touching the routes.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// The one shipped strategy: a single fixed username/password pair compared
/// exactly.
pub struct SharedSecretPair {
    username: String,
    password: String,
}

impl SharedSecretPair {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl CredentialVerifier for SharedSecretPair {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

fn decode_basic(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

fn challenge() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"stackdeck\"")],
        "unauthorized",
    )
        .into_response()
}

// Middleware: whole-surface Basic auth when operator credentials are
// configured; a no-op otherwise.
pub async fn require_operator(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let Some(verifier) = state.verifier.as_ref() else {
        return next.run(req).await;
    };

    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(decode_basic);

    match presented {
        Some((username, password)) if verifier.verify(&username, &password) => next.run(req).await,
        _ => challenge(),
    }
}
