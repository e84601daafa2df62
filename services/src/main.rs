use backoffice_services::{
    config::Config,
    identity::{HttpIdentityProvider, IdentityProvider},
    routes,
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const BUILD_DATE: &str = env!("BUILD_DATE");
const BUILD_COMMIT: &str = env!("BUILD_COMMIT");
const BUILD_BRANCH: &str = env!("BUILD_BRANCH");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in development; deployed environments set real variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Print build information
    print_build_info();

    // Load configuration
    let config: Config = Config::init()?;
    info!(
        environment = %config.environment(),
        server_addr = %config.server_addr(),
        port = %config.port(),
        "Configuration loaded"
    );

    // Build the identity provider client when an endpoint is configured
    let provider = identity_provider(&config);

    // Build the application router
    let route = routes(provider, config.clone());

    // Create socket address
    let addr = SocketAddr::from((config.server_addr().parse::<IpAddr>()?, config.port()));

    info!("Starting server on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, route).await?;

    Ok(())
}

fn identity_provider(config: &Config) -> Option<Arc<dyn IdentityProvider>> {
    match (config.identity_url(), config.identity_project()) {
        (Some(url), Some(project)) => {
            info!(identity_url = url, "Using HTTP identity provider");
            Some(Arc::new(HttpIdentityProvider::new(url, project)))
        }
        _ => {
            info!("No identity provider configured");
            None
        }
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,backoffice_services=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Print build information
fn print_build_info() {
    info!("===========================================");
    info!("  Backoffice Services");
    info!("===========================================");
    info!("Build Date:   {}", BUILD_DATE);
    info!("Build Commit: {}", BUILD_COMMIT);
    info!("Build Branch: {}", BUILD_BRANCH);
    info!("===========================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_constants_exist() {
        // Verify build info constants are available
        assert!(!BUILD_DATE.is_empty());
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_BRANCH.is_empty());
    }

    #[test]
    fn test_identity_provider_requires_full_configuration() {
        let config = Config::new_for_test();
        assert!(identity_provider(&config).is_none());
    }
}
