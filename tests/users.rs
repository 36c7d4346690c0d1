//! Integration tests for user operations
//! Covers:
//! - Profile reference kept as an id without hydration
//! - Recursive hydration (user -> profile -> roles)
//! - createUser has no replace variant

mod common;

use common::{capture, security_with, MockTransport};
use security_client::{Arg, CreateOptions, ProfileRef, RoleRefs, SecurityEntity, User};
use serde_json::json;

fn script_user_graph(transport: &MockTransport) {
    transport.respond(
        "getUser",
        json!({"_id": "u1", "_source": {"name": "Ada", "profile": "admin"}}),
    );
    transport.respond(
        "getProfile",
        json!({"_id": "admin", "_source": {"roles": ["r1"]}}),
    );
    transport.respond("getRole", json!({"_id": "r1", "_source": {"allow": true}}));
}

#[tokio::test]
async fn test_get_user_without_hydration() {
    let transport = MockTransport::new();
    script_user_graph(&transport);
    let security = security_with(transport.clone());

    let (cb, rx) = capture();
    security.get_user("u1", false, Some(cb)).unwrap();
    let user = rx.await.unwrap().unwrap();

    assert_eq!(user.profile(), Some(&ProfileRef::Id("admin".to_string())));
    assert_eq!(user.content(), &json!({"name": "Ada"}));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_get_user_hydrates_recursively() {
    let transport = MockTransport::new();
    script_user_graph(&transport);
    let security = security_with(transport.clone());

    let (cb, rx) = capture();
    security.get_user("u1", true, Some(cb)).unwrap();
    let user = rx.await.unwrap().unwrap();

    match user.profile() {
        Some(ProfileRef::Hydrated(profile)) => {
            assert_eq!(profile.id(), "admin");
            match profile.roles() {
                RoleRefs::Hydrated(roles) => assert_eq!(roles[0].id(), "r1"),
                other => panic!("expected hydrated roles, got {:?}", other),
            }
        }
        other => panic!("expected hydrated profile, got {:?}", other),
    }
    assert_eq!(transport.actions(), vec!["getUser", "getProfile", "getRole"]);
}

#[tokio::test]
async fn test_get_user_with_embedded_profile() {
    let transport = MockTransport::new();
    transport.respond(
        "getUser",
        json!({"_id": "u1", "_source": {"profile": {"_id": "admin", "_source": {"roles": [{"_id": "r1", "_source": {}}]}}}}),
    );
    let security = security_with(transport.clone());

    let (cb, rx) = capture();
    security.get_user("u1", true, Some(cb)).unwrap();
    let user = rx.await.unwrap().unwrap();

    assert!(user.is_hydrated());
    assert_eq!(user.profile_id(), Some("admin"));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_user_without_profile() {
    let transport = MockTransport::new();
    transport.respond("getUser", json!({"_id": "u2", "_source": {"name": "Bob"}}));
    let security = security_with(transport.clone());

    let (cb, rx) = capture();
    security.get_user("u2", true, Some(cb)).unwrap();
    let user = rx.await.unwrap().unwrap();

    assert_eq!(user.profile(), None);
    assert!(!user.is_hydrated());
}

#[tokio::test]
async fn test_search_users() {
    let transport = MockTransport::new();
    transport.respond(
        "searchUsers",
        json!({"total": 3, "hits": [{"_id": "u1", "_source": {"profile": "admin"}}]}),
    );
    let security = security_with(transport.clone());

    let (cb, rx) = capture();
    security.search_users(json!({}), false, Some(cb)).unwrap();
    let result = rx.await.unwrap().unwrap();

    assert_eq!(result.total, 3);
    assert_eq!(result.documents.len(), 1);
    assert_eq!(result.documents[0].profile_id(), Some("admin"));
}

#[tokio::test]
async fn test_create_user_ignores_replace_options() {
    let transport = MockTransport::new();
    transport.respond("createUser", json!({"_id": "u1", "_source": {"profile": "admin"}}));
    let security = security_with(transport.clone());

    let user = security
        .user_factory("u1", json!({"profile": "admin"}))
        .unwrap();
    let (cb, rx) = capture::<User>();
    security
        .create_user(user, (), CreateOptions::update(), Arg::Callback(cb))
        .unwrap();
    let created = rx.await.unwrap().unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].request.action, "createUser");
    assert_eq!(calls[0].request.id.as_deref(), Some("u1"));
    assert_eq!(calls[0].request.body, Some(json!({"profile": "admin"})));
    assert_eq!(created.profile_id(), Some("admin"));
}

#[tokio::test]
async fn test_delete_user() {
    let transport = MockTransport::new();
    transport.respond("deleteUser", json!({}));
    let security = security_with(transport.clone());

    let (cb, rx) = capture();
    security.delete_user("u1", Some(cb)).unwrap();

    // no _id echoed: the requested id is reported
    assert_eq!(rx.await.unwrap().unwrap(), "u1");
    assert_eq!(transport.calls()[0].request.id.as_deref(), Some("u1"));
}
