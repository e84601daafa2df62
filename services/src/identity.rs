//! Identity provider client.
//!
//! The gateway never checks credentials itself. It hands the session token
//! from the request cookie to the identity provider and asks two questions:
//! whose session is this, and which teams is that account a member of? The
//! guard middleware combines the answers into an allow/deny decision.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Header naming the provider-side project the gateway belongs to.
pub const PROJECT_HEADER: &str = "x-identity-project";

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("identity provider returned {0}")]
    UnexpectedStatus(StatusCode),
    #[error("identity response body was malformed: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Authenticated identity handle resolved from a session token.
///
/// Carries the token it was resolved from so follow-up provider calls
/// authenticate as the same session.
#[derive(Debug, Clone)]
pub struct Session {
    user_id: String,
    email: String,
    token: String,
}

impl Session {
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            token: token.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// One team membership of a session's account.
///
/// Field names mirror the provider's wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct Membership {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "teamId")]
    pub team_id: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AccountBody {
    #[serde(rename = "$id")]
    id: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct MembershipsBody {
    memberships: Vec<Membership>,
}

/// What the access guard needs from the identity provider.
///
/// Implemented over HTTP in production ([`HttpIdentityProvider`]) and by
/// scripted mocks in tests. Handles are shared as `Arc<dyn IdentityProvider>`
/// captured by the middleware closure.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the session a cookie token belongs to.
    async fn current_session(&self, token: &str) -> Result<Session, IdentityError>;

    /// List team memberships for the session's account.
    async fn list_memberships(&self, session: &Session) -> Result<Vec<Membership>, IdentityError>;
}

/// Identity provider client speaking JSON over REST.
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    client: Client,
    base_url: String,
    project: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: impl Into<String>, project: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            project: project.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, IdentityError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .header(PROJECT_HEADER, &self.project)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn current_session(&self, token: &str) -> Result<Session, IdentityError> {
        let account: AccountBody = self.get_json("/v1/account", token).await?;
        Ok(Session::new(account.id, account.email, token))
    }

    async fn list_memberships(&self, session: &Session) -> Result<Vec<Membership>, IdentityError> {
        let body: MembershipsBody = self
            .get_json("/v1/account/memberships", session.token())
            .await?;
        Ok(body.memberships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn current_session_sends_token_and_project_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/account"))
            .and(header("authorization", "Bearer tok-123"))
            .and(header(PROJECT_HEADER, "backoffice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "$id": "user-1",
                "email": "admin@example.com",
                "name": "Admin"
            })))
            .mount(&server)
            .await;

        let provider = HttpIdentityProvider::new(server.uri(), "backoffice");
        let session = provider
            .current_session("tok-123")
            .await
            .expect("session should resolve");

        assert_eq!(session.user_id(), "user-1");
        assert_eq!(session.email(), "admin@example.com");
        assert_eq!(session.token(), "tok-123");
    }

    #[tokio::test]
    async fn list_memberships_parses_team_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/account/memberships"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": 2,
                "memberships": [
                    { "$id": "m-1", "userId": "user-1", "teamId": "admin", "roles": ["owner"] },
                    { "$id": "m-2", "userId": "user-1", "teamId": "support" }
                ]
            })))
            .mount(&server)
            .await;

        let provider = HttpIdentityProvider::new(server.uri(), "backoffice");
        let session = Session::new("user-1", "admin@example.com", "tok-123");
        let memberships = provider
            .list_memberships(&session)
            .await
            .expect("memberships should resolve");

        assert_eq!(memberships.len(), 2);
        assert_eq!(memberships[0].team_id, "admin");
        assert_eq!(memberships[0].roles, vec!["owner".to_string()]);
        assert_eq!(memberships[1].team_id, "support");
        assert!(memberships[1].roles.is_empty());
    }

    #[tokio::test]
    async fn unexpected_status_is_reported_as_such() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/account"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let provider = HttpIdentityProvider::new(server.uri(), "backoffice");
        let error = provider
            .current_session("expired")
            .await
            .expect_err("expired token should not resolve");

        assert!(matches!(
            error,
            IdentityError::UnexpectedStatus(StatusCode::UNAUTHORIZED)
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_reported_as_such() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/account"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = HttpIdentityProvider::new(server.uri(), "backoffice");
        let error = provider
            .current_session("tok-123")
            .await
            .expect_err("garbage body should not parse");

        assert!(matches!(error, IdentityError::MalformedBody(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = HttpIdentityProvider::new("https://identity.example.com/", "backoffice");
        assert_eq!(provider.base_url, "https://identity.example.com");
    }
}
