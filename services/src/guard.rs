//! Access guard for the admin subtree.
//!
//! Every request to `/admin/*` runs through [`admin_guard_middleware`]:
//! read the session token from the request cookie, resolve the session
//! through the identity provider, list the account's team memberships, and
//! require one of them to be the admin team. A passing request proceeds with
//! the resolved [`Session`] in its extensions; everything else (missing
//! cookie, provider failure, expired session, no admin membership) is
//! answered with a `303 See Other` redirect to the login page. The guard
//! never bubbles an error past its boundary and performs no retries.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::{any, get},
};
use axum_extra::headers::{Cookie, HeaderMapExt};

use crate::config::Config;
use crate::identity::IdentityProvider;
use crate::pages;

/// Where denied requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// Guard parameters captured by the middleware closure.
#[derive(Debug, Clone)]
pub struct AdminGuardConfig {
    pub admin_team: String,
    pub session_cookie: String,
}

impl AdminGuardConfig {
    pub fn new(admin_team: impl Into<String>, session_cookie: impl Into<String>) -> Self {
        Self {
            admin_team: admin_team.into(),
            session_cookie: session_cookie.into(),
        }
    }
}

impl From<&Config> for AdminGuardConfig {
    fn from(config: &Config) -> Self {
        Self::new(config.admin_team(), config.session_cookie())
    }
}

/// Create the `/admin` route group with the access guard applied.
///
/// # Security
///
/// In deployed environments an identity provider is required. When none is
/// configured, a fallback router redirects every admin request to the login
/// page instead of serving unguarded pages. Only Local and Test environments
/// skip the guard, so the dashboard can be developed without a running
/// provider.
pub fn create_admin_routes(
    config: &Config,
    provider: Option<Arc<dyn IdentityProvider>>,
) -> Router {
    let routes = Router::new()
        .route("/", get(pages::admin_overview_page))
        .route("/users", get(pages::admin_users_page));

    match provider {
        Some(provider) => {
            let guard_config = Arc::new(AdminGuardConfig::from(config));

            routes.layer(middleware::from_fn(move |req, next| {
                let provider = Arc::clone(&provider);
                let guard_config = Arc::clone(&guard_config);
                admin_guard_middleware(provider, guard_config, req, next)
            }))
        }
        None if config.requires_guard_for_admin() => {
            // Deployed environment without a provider - fail secure
            tracing::warn!(
                env = %config.environment(),
                "identity provider not configured in a deployed environment - all admin requests will be redirected to login"
            );
            Router::new().fallback(any(provider_not_configured))
        }
        None => {
            // Local/Test environment without a provider - allow unguarded access
            routes
        }
    }
}

/// The guard itself. Always produces a response.
pub async fn admin_guard_middleware(
    provider: Arc<dyn IdentityProvider>,
    config: Arc<AdminGuardConfig>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = session_token(req.headers(), &config.session_cookie) else {
        tracing::warn!(
            cookie = %config.session_cookie,
            "admin request without a session cookie"
        );
        return redirect_to_login();
    };

    let session = match provider.current_session(&token).await {
        Ok(session) => session,
        Err(error) => {
            tracing::error!(%error, "failed to resolve session");
            return redirect_to_login();
        }
    };

    let memberships = match provider.list_memberships(&session).await {
        Ok(memberships) => memberships,
        Err(error) => {
            tracing::error!(%error, user_id = %session.user_id(), "failed to list memberships");
            return redirect_to_login();
        }
    };

    if !memberships
        .iter()
        .any(|membership| membership.team_id == config.admin_team)
    {
        tracing::warn!(
            user_id = %session.user_id(),
            team = %config.admin_team,
            "session is not a member of the admin team"
        );
        return redirect_to_login();
    }

    req.extensions_mut().insert(session);
    next.run(req).await
}

/// Pull the session token out of the `Cookie` header.
fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .typed_get::<Cookie>()
        .and_then(|cookies| cookies.get(cookie_name).map(str::to_owned))
}

/// Handler behind the fail-secure fallback router.
async fn provider_not_configured() -> Response {
    redirect_to_login()
}

fn redirect_to_login() -> Response {
    Redirect::to(LOGIN_PATH).into_response()
}
