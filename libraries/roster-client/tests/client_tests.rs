//! Tests for the Roster client library.
//!
//! These tests use mock servers to verify client behavior without requiring
//! a real server connection.

use roster_client::{ClientConfig, ClientError, CreateUser, RosterClient, UpdateUser, UserId};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_user(id: &str, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Unknown User",
        "email": email,
        "role": "user",
        "createdAt": "2024-01-01T00:00:00+00:00"
    })
}

async fn client_for(server: &MockServer) -> RosterClient {
    RosterClient::new(ClientConfig::new(server.uri())).expect("valid url")
}

// =============================================================================
// List & Cache Tests
// =============================================================================

mod listing {
    use super::*;

    #[tokio::test]
    async fn test_get_users_fetches_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                sample_user("1", "a@example.com"),
                sample_user("2", "b@example.com"),
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let users = client.get_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "a@example.com");
        assert_eq!(users[1].id.as_str(), "2");
    }

    #[tokio::test]
    async fn test_second_get_users_is_served_from_cache() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([sample_user("1", "a@example.com")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        let first = client.get_users().await.unwrap();
        let second = client.get_users().await.unwrap();

        assert_eq!(first, second);
        // The expect(1) on the mock verifies only one upstream request happened
    }

    #[tokio::test]
    async fn test_explicit_invalidate_forces_refetch() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        client.get_users().await.unwrap();
        client.invalidate().await;
        client.get_users().await.unwrap();
    }
}

// =============================================================================
// Mutation Tests
// =============================================================================

mod mutations {
    use super::*;

    #[tokio::test]
    async fn test_create_user_posts_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(sample_user("9", "new@example.com")),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = client
            .create_user(CreateUser {
                email: Some("new@example.com".to_string()),
                ..CreateUser::default()
            })
            .await
            .unwrap();

        assert_eq!(user.id.as_str(), "9");
        assert_eq!(user.email, "new@example.com");
    }

    #[tokio::test]
    async fn test_create_invalidates_cache() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(sample_user("9", "new@example.com")),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        // Prime the cache, mutate, then read again
        client.get_users().await.unwrap();
        client
            .create_user(CreateUser {
                email: Some("new@example.com".to_string()),
                ..CreateUser::default()
            })
            .await
            .unwrap();
        client.get_users().await.unwrap();
    }

    #[tokio::test]
    async fn test_update_user_puts_with_id_param() {
        let server = MockServer::start().await;

        let mut updated = sample_user("1", "a@example.com");
        updated["role"] = json!("admin");

        Mock::given(method("PUT"))
            .and(path("/api/users"))
            .and(query_param("id", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(updated))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = client
            .update_user(
                &UserId::new("1"),
                UpdateUser {
                    role: Some(roster_client::Role::Admin),
                    ..UpdateUser::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(user.role, roster_client::Role::Admin);
    }

    #[tokio::test]
    async fn test_update_invalidates_cache() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/api/users"))
            .and(query_param("id", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(sample_user("1", "a@example.com")),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        // Prime the cache, mutate, then read again
        client.get_users().await.unwrap();
        client
            .update_user(&UserId::new("1"), UpdateUser::default())
            .await
            .unwrap();
        client.get_users().await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_user_returns_confirmation_and_invalidates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/users"))
            .and(query_param("id", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "success": true, "id": "1" })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        client.get_users().await.unwrap();
        let confirmation = client.delete_user(&UserId::new("1")).await.unwrap();
        assert!(confirmation.success);
        assert_eq!(confirmation.id.as_str(), "1");

        client.get_users().await.unwrap();
    }
}

// =============================================================================
// Error Handling Tests
// =============================================================================

mod errors {
    use super::*;

    #[tokio::test]
    async fn test_server_error_body_is_decoded() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "error": "Email is required"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client.create_user(CreateUser::default()).await;

        match result.unwrap_err() {
            ClientError::Server { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Email is required");
            }
            other => panic!("Expected Server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_not_found_surfaces_status() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false,
                "error": "User not found"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client.delete_user(&UserId::new("999")).await;

        match result.unwrap_err() {
            ClientError::Server { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "User not found");
            }
            other => panic!("Expected Server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_cache() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "error": "Email is required"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        client.get_users().await.unwrap();
        let _ = client.create_user(CreateUser::default()).await;

        // The failed create must not have invalidated the cache
        client.get_users().await.unwrap();
    }
}
