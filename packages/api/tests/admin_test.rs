mod common;

use api::{ApiError, Role};
use common::{signed_in, FakeApi};

#[tokio::test]
async fn test_list_users_embeds_contacts() {
    let (server, base) = FakeApi::spawn().await;
    let ana = server.add_user("Ana", "ana@example.com", "secret1", Role::User);
    server.add_user("Root", "root@example.com", "secret1", Role::Admin);
    server.add_contact(ana, "Bob");
    server.add_contact(ana, "Carla");
    let admin = signed_in(&base, "root@example.com", "secret1").await;

    let users = admin.list_all_users().await.unwrap();
    assert_eq!(users.len(), 2);
    let listed = users.iter().find(|u| u.id == ana).unwrap();
    assert_eq!(listed.contact_count(), 2);
    assert_eq!(listed.role, Role::User);

    let contacts = admin.get_user_contacts(ana).await.unwrap();
    assert_eq!(contacts.len(), 2);
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let (server, base) = FakeApi::spawn().await;
    let ana = server.add_user("Ana", "ana@example.com", "secret1", Role::User);
    server.add_user("Root", "root@example.com", "secret1", Role::Admin);
    server.add_contact(ana, "Bob");
    let admin = signed_in(&base, "root@example.com", "secret1").await;

    admin.delete_user(ana).await.unwrap();
    assert_eq!(server.user_count(), 1);
    assert!(admin.get_user_contacts(ana).await.unwrap().is_empty());

    let err = admin.delete_user(ana).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_regular_user_is_forbidden_and_keeps_session() {
    let (server, base) = FakeApi::spawn().await;
    server.add_user("Ana", "ana@example.com", "secret1", Role::User);
    let client = signed_in(&base, "ana@example.com", "secret1").await;

    let err = client.list_all_users().await.unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
    // 403 is not an expired token
    assert!(client.session().load().is_some());
}
