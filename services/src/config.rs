use backoffice_utils::version_info::RuntimeEnv;
use serde::Deserialize;
use std::env::vars;
use std::fmt::Display;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub enum Env {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "pr")]
    Pr,
    #[serde(rename = "nightly")]
    Nightly,
    #[serde(rename = "prod")]
    Prod,
}

impl From<&Env> for RuntimeEnv {
    fn from(env: &Env) -> Self {
        match env {
            Env::Local => RuntimeEnv::Local,
            Env::Test => RuntimeEnv::Test,
            Env::Pr => RuntimeEnv::Pr,
            Env::Nightly => RuntimeEnv::Nightly,
            Env::Prod => RuntimeEnv::Prod,
        }
    }
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Test => write!(f, "test"),
            Env::Pr => write!(f, "pr"),
            Env::Nightly => write!(f, "nightly"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

// The final, validated configuration struct.
// `server_addr`, `admin_team` and `session_cookie` are guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    server_addr: String,
    port: u16,
    // Identity provider endpoint (optional; admin routes fail secure without it)
    identity_url: Option<String>,
    identity_project: Option<String>,
    // Access guard parameters
    admin_team: String,
    session_cookie: String,
}

// An intermediate struct for deserializing environment variables
// where everything except `env` is optional.
#[derive(Deserialize)]
struct RawConfig {
    env: Env,
    server_addr: Option<String>,
    port: Option<u16>,
    identity_url: Option<String>,
    identity_project: Option<String>,
    admin_team: Option<String>,
    session_cookie: Option<String>,
}

impl Config {
    /// Create a test configuration with default values.
    ///
    /// This function is available for both unit tests and integration tests.
    /// It should not be used in production code.
    pub fn new_for_test() -> Self {
        Self {
            env: Env::Local,
            server_addr: "127.0.0.1".to_string(),
            port: 8080,
            identity_url: None,
            identity_project: None,
            admin_team: "admin".to_string(),
            session_cookie: "backoffice_session".to_string(),
        }
    }

    /// Create a test configuration with a specific environment.
    ///
    /// This is intended for tests that need to exercise deployed-environment
    /// behavior (for example the fail-secure admin wiring).
    pub fn new_for_test_with_env(env: Env) -> Self {
        Self {
            env,
            ..Self::new_for_test()
        }
    }

    pub fn environment(&self) -> &Env {
        &self.env
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn is_local(&self) -> bool {
        matches!(self.env, Env::Local)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self.env, Env::Prod)
    }

    pub fn identity_url(&self) -> Option<&str> {
        self.identity_url.as_deref()
    }

    pub fn identity_project(&self) -> Option<&str> {
        self.identity_project.as_deref()
    }

    /// Team identifier a session must be a member of to reach admin routes.
    pub fn admin_team(&self) -> &str {
        &self.admin_team
    }

    /// Name of the cookie carrying the session token.
    pub fn session_cookie(&self) -> &str {
        &self.session_cookie
    }

    /// Whether admin routes must not be served without the access guard.
    ///
    /// Only Local and Test environments may serve the admin subtree
    /// unguarded, to facilitate development without a running identity
    /// provider. Everywhere else a missing provider means every admin
    /// request is redirected to the login page.
    pub fn requires_guard_for_admin(&self) -> bool {
        !matches!(self.env, Env::Local | Env::Test)
    }

    /// Initializes configuration by reading from environment variables
    /// and applying environment-aware defaults.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");

        // First, deserialize into a temporary struct that allows for optional fields
        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            env,
            server_addr,
            port,
            identity_url,
            identity_project,
            admin_team,
            session_cookie,
        } = raw_config;

        // Apply the default logic for `server_addr` based on the environment
        let server_addr = match server_addr {
            Some(addr) => {
                info!("Using provided SERVER_ADDR: {}", addr);
                addr
            }
            None => {
                let default_addr = match env {
                    Env::Local => "127.0.0.1",
                    _ => "0.0.0.0",
                };
                info!(
                    "SERVER_ADDR not set, defaulting to {} for {} environment",
                    default_addr, env
                );
                default_addr.to_string()
            }
        };

        let port = match port {
            Some(port) => port,
            None if matches!(env, Env::Local) => {
                info!("PORT not set, defaulting to 8080 for local environment");
                8080
            }
            None => anyhow::bail!("PORT must be set for {} environment", env),
        };

        // The provider client needs both pieces; catch a half-configured
        // deployment at startup instead of at the first guarded request.
        if identity_url.is_some() && identity_project.is_none() {
            anyhow::bail!(
                "IDENTITY_PROJECT must be set when IDENTITY_URL is configured for {} environment",
                env
            );
        }

        let admin_team = match admin_team {
            Some(team) => team,
            None => {
                info!("ADMIN_TEAM not set, defaulting to \"admin\"");
                "admin".to_string()
            }
        };

        let session_cookie = match session_cookie {
            Some(name) => name,
            None => {
                info!("SESSION_COOKIE not set, defaulting to \"backoffice_session\"");
                "backoffice_session".to_string()
            }
        };

        // Construct the final, validated Config struct
        Ok(Config {
            env,
            server_addr,
            port,
            identity_url,
            identity_project,
            admin_team,
            session_cookie,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn default_server_addr_for_pr_is_public() {
        let raw: RawConfig = from_iter(vec![("ENV", "pr"), ("PORT", "8080")])
            .expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("pr config should build");
        assert_eq!(config.server_addr(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
    }

    #[test]
    fn local_env_defaults_to_loopback_and_8080() {
        let raw: RawConfig =
            from_iter(vec![("ENV", "local")]).expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("local config should build");
        assert_eq!(config.server_addr(), "127.0.0.1");
        assert_eq!(config.port(), 8080);
        assert!(config.is_local());
    }

    #[test]
    fn port_required_for_deployed_environments() {
        let raw: RawConfig =
            from_iter(vec![("ENV", "nightly")]).expect("RawConfig should deserialize");

        let result = Config::from_raw(raw);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PORT"));
    }

    #[test]
    fn guard_parameters_default_when_unset() {
        let raw: RawConfig =
            from_iter(vec![("ENV", "local")]).expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("local config should build");
        assert_eq!(config.admin_team(), "admin");
        assert_eq!(config.session_cookie(), "backoffice_session");
    }

    #[test]
    fn guard_parameters_can_be_overridden() {
        let raw: RawConfig = from_iter(vec![
            ("ENV", "local"),
            ("ADMIN_TEAM", "operators"),
            ("SESSION_COOKIE", "sid"),
        ])
        .expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("local config should build");
        assert_eq!(config.admin_team(), "operators");
        assert_eq!(config.session_cookie(), "sid");
    }

    #[test]
    fn identity_project_required_when_url_is_set() {
        let raw: RawConfig = from_iter(vec![
            ("ENV", "prod"),
            ("PORT", "8080"),
            ("IDENTITY_URL", "https://identity.example.com"),
        ])
        .expect("RawConfig should deserialize");

        let result = Config::from_raw(raw);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("IDENTITY_PROJECT"));
    }

    #[test]
    fn identity_pair_is_accepted() {
        let raw: RawConfig = from_iter(vec![
            ("ENV", "prod"),
            ("PORT", "8080"),
            ("IDENTITY_URL", "https://identity.example.com"),
            ("IDENTITY_PROJECT", "backoffice"),
        ])
        .expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("prod config should build");
        assert_eq!(config.identity_url(), Some("https://identity.example.com"));
        assert_eq!(config.identity_project(), Some("backoffice"));
        assert!(config.is_prod());
    }

    #[test]
    fn identity_provider_optional_without_url() {
        let raw: RawConfig = from_iter(vec![("ENV", "pr"), ("PORT", "8080")])
            .expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("pr config should build without a provider");
        assert!(config.identity_url().is_none());
        assert!(config.identity_project().is_none());
    }

    #[test]
    fn guard_required_everywhere_but_local_and_test() {
        assert!(!Config::new_for_test_with_env(Env::Local).requires_guard_for_admin());
        assert!(!Config::new_for_test_with_env(Env::Test).requires_guard_for_admin());
        assert!(Config::new_for_test_with_env(Env::Pr).requires_guard_for_admin());
        assert!(Config::new_for_test_with_env(Env::Nightly).requires_guard_for_admin());
        assert!(Config::new_for_test_with_env(Env::Prod).requires_guard_for_admin());
    }
}
