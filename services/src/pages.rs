//! HTML shells served by the gateway.
//!
//! The dashboard itself is the egui client (`backoffice-ui`); these pages
//! are the scaffolding it mounts into, plus the public login page the access
//! guard redirects to. The gateway does not render dashboard content.

use axum::response::Html;

fn shell(title: &str, page: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
</head>
<body>
    <div id="backoffice-root" data-page="{page}"></div>
    <noscript>The Backoffice dashboard requires JavaScript and WebAssembly.</noscript>
</body>
</html>
"#
    ))
}

/// Public login page. Denied admin requests land here.
pub async fn login_page() -> Html<String> {
    shell("Sign in - Backoffice", "login")
}

/// Admin overview shell, guarded.
pub async fn admin_overview_page() -> Html<String> {
    shell("Overview - Backoffice", "overview")
}

/// Admin users shell, guarded.
pub async fn admin_users_page() -> Html<String> {
    shell("Users - Backoffice", "users")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_shell_mounts_the_login_page() {
        let Html(body) = login_page().await;
        assert!(body.contains(r#"data-page="login""#));
        assert!(body.contains("Sign in"));
    }

    #[tokio::test]
    async fn admin_shells_mount_their_pages() {
        let Html(overview) = admin_overview_page().await;
        assert!(overview.contains(r#"data-page="overview""#));

        let Html(users) = admin_users_page().await;
        assert!(users.contains(r#"data-page="users""#));
    }

    #[tokio::test]
    async fn shells_share_the_mount_node() {
        for Html(body) in [
            login_page().await,
            admin_overview_page().await,
            admin_users_page().await,
        ] {
            assert!(body.contains(r#"id="backoffice-root""#));
        }
    }
}
