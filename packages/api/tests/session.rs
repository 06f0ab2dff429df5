mod common;

use std::rc::Rc;

use api::{ApiClient, ApiError, Session};
use store::routing::{resolve_path, Outcome, Page};
use store::{MemoryTokenStore, Role, TokenStore};

use common::{ADMIN_EMAIL, BROKEN_EMAIL, PASSWORD, STUDENT_EMAIL};

fn session_for(base_url: &str, tokens: &MemoryTokenStore) -> Session {
    Session::restore(ApiClient::new(base_url), Rc::new(tokens.clone()))
}

#[tokio::test]
async fn test_admin_login_lands_on_admin_dashboard() {
    let fixture = common::spawn().await;
    let tokens = MemoryTokenStore::new();
    let mut session = session_for(&fixture.base_url, &tokens);

    let identity = session.login(ADMIN_EMAIL, PASSWORD).await.unwrap();
    assert_eq!(identity.id, "1");
    assert_eq!(identity.role, Role::Admin);
    assert_eq!(session.identity(), Some(&identity));

    // The raw token is what gets persisted and decodes to the same claims
    let stored = tokens.load().unwrap();
    assert_eq!(stored, common::mint_token("1", "admin"));
    assert_eq!(session.auth_header(), format!("Bearer {stored}"));

    assert_eq!(resolve_path("/", session.identity()), Outcome::Redirect(Page::Admin));
    assert_eq!(resolve_path("/admin", session.identity()), Outcome::Render(Page::Admin));
}

#[tokio::test]
async fn test_bad_credentials_surface_server_message() {
    let fixture = common::spawn().await;
    let tokens = MemoryTokenStore::new();
    let mut session = session_for(&fixture.base_url, &tokens);

    let err = session.login(ADMIN_EMAIL, "wrong").await.unwrap_err();
    assert_eq!(err.server_message(), Some("Bad credentials"));
    assert_eq!(err.status(), Some(401));
    assert!(!session.is_authenticated());
    assert!(tokens.load().is_none());
}

#[tokio::test]
async fn test_malformed_token_is_not_stored() {
    let fixture = common::spawn().await;
    let tokens = MemoryTokenStore::new();
    let mut session = session_for(&fixture.base_url, &tokens);

    let err = session.login(BROKEN_EMAIL, PASSWORD).await.unwrap_err();
    assert!(matches!(err, ApiError::Token(_)));
    assert!(!session.is_authenticated());
    assert!(tokens.load().is_none());
}

#[tokio::test]
async fn test_transport_failure() {
    let tokens = MemoryTokenStore::new();
    // Nothing listens on the discard port
    let mut session = session_for("http://127.0.0.1:9", &tokens);

    let err = session.login(ADMIN_EMAIL, PASSWORD).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.server_message().is_none());
}

#[tokio::test]
async fn test_signup_logs_in_with_requested_role() {
    let fixture = common::spawn().await;
    let tokens = MemoryTokenStore::new();
    let mut session = session_for(&fixture.base_url, &tokens);

    let identity = session
        .signup("Trainer", "trainer@example.com", "pw123456", true)
        .await
        .unwrap();
    assert_eq!(identity.id, "3");
    assert_eq!(identity.role, Role::Admin);
    assert!(tokens.load().is_some());

    session.logout();
    let student = session
        .signup("Pupil", "pupil@example.com", "pw123456", false)
        .await
        .unwrap();
    assert_eq!(student.role, Role::Student);
    assert_eq!(resolve_path("/signup", session.identity()), Outcome::Redirect(Page::Student));
}

#[tokio::test]
async fn test_signup_with_taken_email() {
    let fixture = common::spawn().await;
    let tokens = MemoryTokenStore::new();
    let mut session = session_for(&fixture.base_url, &tokens);

    let err = session
        .signup("Someone", STUDENT_EMAIL, "pw123456", false)
        .await
        .unwrap_err();
    assert_eq!(err.server_message(), Some("Email already registered"));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_restore_after_reload() {
    let fixture = common::spawn().await;
    let tokens = MemoryTokenStore::new();
    let mut first = session_for(&fixture.base_url, &tokens);
    let identity = first.login(STUDENT_EMAIL, PASSWORD).await.unwrap();

    let reloaded = session_for(&fixture.base_url, &tokens);
    assert_eq!(reloaded.identity(), Some(&identity));
    assert_eq!(reloaded.api().list_lessons().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_requests_without_token_are_rejected() {
    let fixture = common::spawn().await;
    let tokens = MemoryTokenStore::new();
    let session = session_for(&fixture.base_url, &tokens);
    assert_eq!(session.auth_header(), "Bearer ");

    let err = session.api().list_lessons().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), Some("Missing Authorization Header"));
}

#[tokio::test]
async fn test_logout_drops_credentials() {
    let fixture = common::spawn().await;
    let tokens = MemoryTokenStore::new();
    let mut session = session_for(&fixture.base_url, &tokens);
    session.login(ADMIN_EMAIL, PASSWORD).await.unwrap();

    session.logout();
    assert!(tokens.load().is_none());
    assert_eq!(resolve_path("/admin", session.identity()), Outcome::Redirect(Page::Login));
    assert!(session.api().list_lessons().await.is_err());
}
