use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// The service is stateless per request; only configuration is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
