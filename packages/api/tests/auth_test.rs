mod common;

use api::{ApiError, Role};
use common::{client, signed_in, FakeApi};

#[tokio::test]
async fn test_register_returns_user_session() {
    let (_server, base) = FakeApi::spawn().await;
    let client = client(&base);

    let resp = client
        .register("Ana", "ana@example.com", "secret1")
        .await
        .unwrap();
    assert_eq!(resp.role, Role::User);
    assert_eq!(resp.name, "Ana");

    let session = resp.into_session();
    client.session().save(&session);
    assert_eq!(client.session().load(), Some(session));
}

#[tokio::test]
async fn test_duplicate_registration_is_validation_error() {
    let (server, base) = FakeApi::spawn().await;
    server.add_user("Ana", "ana@example.com", "secret1", Role::User);

    let err = client(&base)
        .register("Ana", "ana@example.com", "secret1")
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Validation("Email already exists".into()));
    assert_eq!(err.user_message("Registration failed. Please try again."), "Email already exists");
}

#[tokio::test]
async fn test_bad_credentials_is_auth_error() {
    let (server, base) = FakeApi::spawn().await;
    server.add_user("Ana", "ana@example.com", "secret1", Role::User);

    let err = client(&base)
        .login("ana@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Auth(_)));
}

#[tokio::test]
async fn test_admin_endpoints() {
    let (server, base) = FakeApi::spawn().await;
    server.add_user("Ana", "ana@example.com", "secret1", Role::User);
    let client = client(&base);

    let admin = client
        .admin_register("Root", "root@example.com", "secret1")
        .await
        .unwrap();
    assert_eq!(admin.role, Role::Admin);

    let again = client
        .admin_login("root@example.com", "secret1")
        .await
        .unwrap();
    assert_eq!(again.user_id, admin.user_id);

    // A regular account cannot come in through the admin door
    let err = client
        .admin_login("ana@example.com", "secret1")
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Auth("Access denied. Admin role required.".into()));
}

#[tokio::test]
async fn test_auth_requests_skip_bearer_even_when_signed_in() {
    let (server, base) = FakeApi::spawn().await;
    server.add_user("Ana", "ana@example.com", "secret1", Role::User);
    let client = signed_in(&base, "ana@example.com", "secret1").await;

    client.login("ana@example.com", "secret1").await.unwrap();
    client.list_contacts().await.unwrap();

    for request in server.requests_to("/api/auth/login") {
        assert!(request.authorization.is_none());
    }
    let listed = server.requests_to("/api/contacts");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].authorization.as_deref(), Some("Bearer token-1"));
}

#[tokio::test]
async fn test_rejected_token_clears_session() {
    let (server, base) = FakeApi::spawn().await;
    let id = server.add_user("Ana", "ana@example.com", "secret1", Role::User);
    let client = signed_in(&base, "ana@example.com", "secret1").await;
    assert!(client.session().load().is_some());

    // Simulate the server forgetting the account behind the token
    let admin_id = server.add_user("Root", "root@example.com", "secret1", Role::Admin);
    let admin = signed_in(&base, "root@example.com", "secret1").await;
    admin.delete_user(id).await.unwrap();
    assert!(admin_id > id);

    let err = client.list_contacts().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert!(client.session().load().is_none());
}

#[tokio::test]
async fn test_health() {
    let (_server, base) = FakeApi::spawn().await;
    let health = client(&base).health().await.unwrap();
    assert!(health.is_up());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = client("http://127.0.0.1:9/api");
    let err = client.list_contacts().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
