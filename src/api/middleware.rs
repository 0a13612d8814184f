//! Bearer-key authentication for the API.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::config::SandboxConfig;

/// The key requests must present, if any.
#[derive(Clone, Debug, Default)]
pub struct ApiKey(Option<String>);

impl ApiKey {
    pub fn disabled() -> Self {
        Self(None)
    }

    pub fn required(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn from_config(config: &SandboxConfig) -> Self {
        Self(config.api_key.clone())
    }

    /// Whether the `Authorization` header value grants access.
    pub fn accepts(&self, header: Option<&str>) -> bool {
        let Some(expected) = &self.0 else {
            return true;
        };
        header
            .and_then(|value| value.strip_prefix("Bearer "))
            .is_some_and(|token| token == expected)
    }
}

/// Reject requests without the configured bearer key.
pub async fn auth_middleware(
    State(api_key): State<ApiKey>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if api_key.accepts(header) {
        Ok(next.run(request).await)
    } else {
        tracing::warn!(
            path = %request.uri().path(),
            "Rejected request with missing or invalid API key"
        );
        Err(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_key_accepts_anything() {
        let key = ApiKey::disabled();
        assert!(key.accepts(None));
        assert!(key.accepts(Some("Bearer whatever")));
    }

    #[test]
    fn required_key_needs_matching_bearer_token() {
        let key = ApiKey::required("secret");
        assert!(key.accepts(Some("Bearer secret")));
        assert!(!key.accepts(Some("Bearer wrong")));
        assert!(!key.accepts(Some("secret")));
        assert!(!key.accepts(None));
    }

    #[test]
    fn from_config_reads_api_key() {
        let config = SandboxConfig {
            api_key: Some("k".into()),
            ..SandboxConfig::default()
        };
        assert!(ApiKey::from_config(&config).accepts(Some("Bearer k")));
        assert!(!ApiKey::from_config(&config).accepts(None));
    }
}
