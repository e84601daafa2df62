//! Backoffice gateway: serves the dashboard page shells and enforces the
//! access guard on the `/admin` subtree.

#![warn(clippy::all, rust_2018_idioms)]

use std::sync::Arc;

use axum::{
    Router,
    extract::Extension,
    http::{HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{any, get},
};
use backoffice_utils::version_info::{RuntimeEnv, format_version_for_runtime_env};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::identity::IdentityProvider;

pub mod config;
pub mod guard;
pub mod identity;
pub mod pages;

/// Assemble the gateway router.
///
/// `/login` and the health endpoint are public. The `/admin` subtree is
/// wrapped by the access guard whenever an identity provider is supplied;
/// see [`guard::create_admin_routes`] for the fail-secure wiring when it
/// is not.
pub fn routes(provider: Option<Arc<dyn IdentityProvider>>, config: Config) -> Router {
    let admin_routes = guard::create_admin_routes(&config, provider);

    Router::new()
        .route("/is-health", get(health_check))
        .route("/login", get(pages::login_page))
        .nest("/admin", admin_routes)
        .fallback(any(catch_all))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(config))
}

async fn health_check(Extension(config): Extension<Config>) -> impl IntoResponse {
    let mut response = (StatusCode::OK, "OK").into_response();

    let env_value = config.environment().to_string();
    response.headers_mut().insert(
        HeaderName::from_static("x-service-env"),
        HeaderValue::from_str(&env_value).expect("environment header is valid ASCII"),
    );

    let runtime_env: RuntimeEnv = config.environment().into();
    let version_value = format_version_for_runtime_env(runtime_env);
    response.headers_mut().insert(
        HeaderName::from_static("x-service-version"),
        HeaderValue::from_str(&version_value).expect("version header is valid ASCII"),
    );

    response
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
