#[path = "../helpers/mod.rs"]
mod helpers;

use serde_json::json;
use sevadesk::config::RouteOverrides;
use sevadesk::core::traits::TrashRepository;
use sevadesk::core::{AppError, EntityKind, LifecycleState};
use sevadesk::http::ApiClient;
use sevadesk::modules::{repository_for, RestTrashRepository};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repository(server: &MockServer, kind: EntityKind) -> RestTrashRepository {
    let api = ApiClient::new(&helpers::api_config(&server.uri())).unwrap();
    repository_for(kind, api, &RouteOverrides::default())
}

#[tokio::test]
async fn test_list_deleted_blogs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/trash"))
        .and(header("accept", "application/json"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "deletedBlogs": [
                { "_id": "b1", "title": "Ganga Aarti", "author": "Ravi", "deletedAt": "2025-11-01T10:00:00Z" },
                { "_id": "b2", "title": "Navgraha", "author": "Meera" }
            ] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = repository(&server, EntityKind::Blog).list_deleted().await.unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.state == LifecycleState::Deleted));
    assert_eq!(records[0].field("title"), Some("Ganga Aarti"));
}

#[tokio::test]
async fn test_list_active_pujas() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pujas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ { "_id": "p1", "title": "Rudrabhishek" } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = repository(&server, EntityKind::Puja).list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].state, LifecycleState::Active);
}

#[tokio::test]
async fn test_restore_uses_entity_method() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/blogs/restore/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/pujas/restore/p1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server, EntityKind::Blog).restore("b1").await.unwrap();
    repository(&server, EntityKind::Puja).restore("p1").await.unwrap();
}

#[tokio::test]
async fn test_soft_and_hard_delete_paths() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/categories/c1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/categories/hard/c1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/puja-forms/hard/f1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server, EntityKind::Category).soft_delete("c1").await.unwrap();
    repository(&server, EntityKind::Category).hard_delete("c1").await.unwrap();
    repository(&server, EntityKind::ParticipationForm)
        .hard_delete("f1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_statuses_map_to_variants() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/bookings/restore/k1"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Booking is not deleted" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/bookings/hard-delete/k2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/bookings/hard-delete/k3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let repo = repository(&server, EntityKind::Booking);

    match repo.restore("k1").await.unwrap_err() {
        AppError::Rejected(msg) => assert_eq!(msg, "Booking is not deleted"),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(matches!(
        repo.hard_delete("k2").await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert_eq!(repo.hard_delete("k3").await.unwrap_err().status(), Some(500));
}

#[tokio::test]
async fn test_unusable_id_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let repo = repository(&server, EntityKind::Blog);
    for id in ["", ".", ".."] {
        assert!(
            matches!(repo.hard_delete(id).await, Err(AppError::Validation(_))),
            "id {id:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_opaque_ids_are_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/blogs/hard/65f1.c0:ff"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/blogs/restore/draft%2F1%20x"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let repo = repository(&server, EntityKind::Blog);
    repo.hard_delete("65f1.c0:ff").await.unwrap();
    repo.restore("draft/1 x").await.unwrap();
}

#[tokio::test]
async fn test_non_json_listing_is_envelope_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bracelets/deleted"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = repository(&server, EntityKind::Bracelet)
        .list_deleted()
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Envelope(_)));
}

#[tokio::test]
async fn test_bearer_token_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rudraksha/deleted"))
        .and(header("authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = helpers::api_config(&server.uri()).with_token("s3cret");
    let repo = repository_for(
        EntityKind::Rudraksha,
        ApiClient::new(&config).unwrap(),
        &RouteOverrides::default(),
    );
    assert!(repo.list_deleted().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_route_override_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/blog/b1/undelete"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let overrides = RouteOverrides::from_yaml(
        r#"
blogs:
  restore: { method: POST, path: "blog/{id}/undelete" }
"#,
    )
    .unwrap();
    let api = ApiClient::new(&helpers::api_config(&server.uri())).unwrap();
    let repo = repository_for(EntityKind::Blog, api, &overrides);

    repo.restore("b1").await.unwrap();
}

#[tokio::test]
async fn test_unreachable_api_is_unavailable() {
    // Bind then drop a listener so the port refuses connections
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let uri = format!("http://127.0.0.1:{}", port);

    let api = ApiClient::new(&helpers::api_config(&uri)).unwrap();
    let repo = repository_for(EntityKind::Blog, api, &RouteOverrides::default());

    let err = repo.list_deleted().await.unwrap_err();
    assert!(matches!(err, AppError::Unavailable(_)), "got {err:?}");
}
